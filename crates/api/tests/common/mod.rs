//! Shared helpers for router-level integration tests.
//!
//! Mirrors the state construction in `main.rs` so tests exercise the same
//! middleware stack that production uses, with the file store rooted in a
//! per-test temporary directory.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use atelier_api::auth::DbCredentialVerifier;
use atelier_api::config::ServerConfig;
use atelier_api::files::FileStore;
use atelier_api::gallery::GalleryManager;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given uploads dir.
pub fn test_config(uploads_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        uploads_dir: uploads_dir.to_path_buf(),
        request_timeout_secs: 30,
        admin_email: None,
        admin_password: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and uploads directory.
pub fn build_test_app(pool: PgPool, uploads_dir: &Path) -> Router {
    let config = test_config(uploads_dir);
    let files = Arc::new(FileStore::new(uploads_dir));
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        files: Arc::clone(&files),
        gallery: Arc::new(GalleryManager::new(pool.clone(), Arc::clone(&files))),
        verifier: Arc::new(DbCredentialVerifier::new(pool)),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a urlencoded form body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Like [`post_form`] but with a Referer header, for redirect-back checks.
pub async fn post_form_with_referer(app: Router, uri: &str, body: &str, referer: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::REFERER, referer)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub const BOUNDARY: &str = "test-boundary-7d9f2c";

/// One multipart field: `(name, optional filename, payload)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

/// Hand-roll a `multipart/form-data` body.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(f) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
