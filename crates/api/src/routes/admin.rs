//! Route definitions for the admin panel.
//!
//! `/addproject` and `/login-submit` live at the top level (the admin forms
//! post there), everything else sits under `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, auth, gallery};
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// GET  /admin                                  -> index
/// GET  /admin/login                            -> login form
/// POST /login-submit                           -> credential check
/// GET  /admin/portfolio                        -> listing (created_at ASC)
/// GET  /admin/single_project/{id}              -> detail
/// GET  /admin/single_project/{id}/add_details  -> upload form
/// POST /addproject                             -> create project
/// POST /admin/delete-project/{id}              -> delete project + files
/// POST /admin/add_details/{id}                 -> add gallery images
/// POST /admin/projects/{id}/delete-images      -> remove gallery images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/login", get(auth::login_page))
        .route("/login-submit", post(auth::login_submit))
        .route("/admin/portfolio", get(admin::portfolio))
        .route("/admin/single_project/{id}", get(admin::single_project))
        .route(
            "/admin/single_project/{id}/add_details",
            get(admin::add_details_page),
        )
        .route("/addproject", post(admin::create_project))
        .route("/admin/delete-project/{id}", post(admin::delete_project))
        .route("/admin/add_details/{id}", post(gallery::add_images))
        .route(
            "/admin/projects/{id}/delete-images",
            post(gallery::delete_images),
        )
}
