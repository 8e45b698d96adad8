//! Repository for the `projects` table.
//!
//! Covers project CRUD plus the two gallery column mutations (replace and
//! set-difference removal). File-system co-mutation lives above this layer;
//! the repository only ever touches the database.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectOrder};

/// Column list for `projects` queries.
const PROJECT_COLUMNS: &str = "\
    id, type, project_name, description, thumbnail, gallery_images, created_at";

/// Provides CRUD and gallery operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project. The thumbnail reference may be absent when no
    /// file was uploaded with the submission.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (type, project_name, description, thumbnail) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.type_code)
            .bind(&input.project_name)
            .bind(input.description.as_deref())
            .bind(input.thumbnail.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List all projects in the given order. No pagination; the result set
    /// is unbounded.
    pub async fn list(pool: &PgPool, order: ProjectOrder) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY {}",
            order.sql()
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project row unconditionally. Returns true if a row was
    /// deleted; a missing id is a no-op, not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set `gallery_images` to exactly `refs`, discarding whatever the
    /// column held before. Returns true if the project row exists.
    ///
    /// Replace, not append: an upload batch becomes the whole gallery. See
    /// DESIGN.md for why this surprising behavior is kept.
    pub async fn replace_gallery(
        pool: &PgPool,
        id: DbId,
        refs: &[String],
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET gallery_images = $1 WHERE id = $2")
            .bind(refs)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove `refs` from `gallery_images` by value.
    ///
    /// Uses set-difference semantics (`unnest ... EXCEPT ...`): duplicates in
    /// the stored array collapse and insertion order is not preserved.
    pub async fn remove_gallery_refs(
        pool: &PgPool,
        id: DbId,
        refs: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE projects \
             SET gallery_images = (\
                SELECT ARRAY(\
                    SELECT unnest(gallery_images) \
                    EXCEPT \
                    SELECT unnest($1::text[])\
                )\
             ) \
             WHERE id = $2",
        )
        .bind(refs)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
