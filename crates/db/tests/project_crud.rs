//! Integration tests for project CRUD against a real database.
//!
//! - Create / fetch / delete round trip
//! - Idempotent delete
//! - The three listing orders

use sqlx::PgPool;

use atelier_db::models::project::{CreateProject, ProjectOrder};
use atelier_db::repositories::ProjectRepo;

fn new_project(name: &str, type_code: i16) -> CreateProject {
    CreateProject {
        type_code,
        project_name: name.to_string(),
        description: None,
        thumbnail: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = ProjectRepo::create(
        &pool,
        &CreateProject {
            type_code: 2,
            project_name: "Villa X".to_string(),
            description: Some("Two floors".to_string()),
            thumbnail: Some("1700000000000-front.jpg".to_string()),
        },
    )
    .await
    .unwrap();

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created project should be findable");

    assert_eq!(found.project_name, "Villa X");
    assert_eq!(found.type_code, 2);
    assert_eq!(found.description.as_deref(), Some("Two floors"));
    assert_eq!(found.thumbnail.as_deref(), Some("1700000000000-front.jpg"));
    assert!(found.gallery().is_empty(), "new project has no gallery");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = ProjectRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_find_is_none(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Delete Me", 1))
        .await
        .unwrap();

    assert!(ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_some());

    let deleted = ProjectRepo::delete(&pool, created.id).await.unwrap();
    assert!(deleted);

    assert!(ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_idempotent(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Once", 3))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, created.id).await.unwrap());
    // Second delete finds nothing and succeeds anyway.
    assert!(!ProjectRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_orders_differ(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("Alpha", 1))
        .await
        .unwrap();
    let b = ProjectRepo::create(&pool, &new_project("Beta", 2))
        .await
        .unwrap();
    let c = ProjectRepo::create(&pool, &new_project("Gamma", 3))
        .await
        .unwrap();

    // Force distinct creation times so the ordering assertion cannot tie.
    for (id, offset) in [(a.id, 3), (b.id, 2), (c.id, 1)] {
        sqlx::query("UPDATE projects SET created_at = now() - make_interval(mins => $1) WHERE id = $2")
            .bind(offset)
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let by_created = ProjectRepo::list(&pool, ProjectOrder::CreatedAsc)
        .await
        .unwrap();
    let created_ids: Vec<_> = by_created.iter().map(|p| p.id).collect();
    assert_eq!(created_ids, vec![a.id, b.id, c.id]);

    let by_id_desc = ProjectRepo::list(&pool, ProjectOrder::IdDesc)
        .await
        .unwrap();
    let desc_ids: Vec<_> = by_id_desc.iter().map(|p| p.id).collect();
    assert_eq!(desc_ids, vec![c.id, b.id, a.id]);
}
