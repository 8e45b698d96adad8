//! Route definitions for the public site.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Public routes.
///
/// ```text
/// GET /                      -> home (created_at ASC)
/// GET /portfolio             -> portfolio (id DESC)
/// GET /single_project/{id}   -> project detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/portfolio", get(pages::portfolio))
        .route("/single_project/{id}", get(pages::single_project))
}
