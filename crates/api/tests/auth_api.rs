//! HTTP-level tests for the admin login flow.

mod common;

use axum::http::{header, StatusCode};
use sqlx::PgPool;

use atelier_api::auth::password::hash_password;
use atelier_db::repositories::AdminUserRepo;
use common::{body_string, get, location, post_form};

async fn seed_admin(pool: &PgPool, email: &str, password: &str) {
    let hash = hash_password(password).unwrap();
    AdminUserRepo::upsert(pool, email, &hash).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_page_renders(pool: PgPool) {
    let uploads = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, uploads.path());
    let response = get(app, "/admin/login").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("/login-submit"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_with_wrong_credentials_redirects_to_login(pool: PgPool) {
    let uploads = tempfile::tempdir().unwrap();
    seed_admin(&pool, "admin@example.com", "right-password").await;

    let app = common::build_test_app(pool, uploads.path());
    let response = post_form(
        app,
        "/login-submit",
        "username=admin%40example.com&password=wrong",
    )
    .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin/login");
    assert!(
        response.headers().get(header::SET_COOKIE).is_none(),
        "no session cookie on failure"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_with_unknown_account_redirects_to_login(pool: PgPool) {
    let uploads = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, uploads.path());
    let response = post_form(
        app,
        "/login-submit",
        "username=nobody%40example.com&password=whatever",
    )
    .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin/login");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_sets_cookie_and_redirects_to_admin(pool: PgPool) {
    let uploads = tempfile::tempdir().unwrap();
    seed_admin(&pool, "admin@example.com", "Correct-Horse-9").await;

    let app = common::build_test_app(pool, uploads.path());
    let response = post_form(
        app,
        "/login-submit",
        "username=admin%40example.com&password=Correct-Horse-9",
    )
    .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/admin");

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("atelier_session="));
    assert!(cookie.contains("HttpOnly"));
}
