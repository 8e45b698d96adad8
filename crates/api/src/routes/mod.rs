pub mod admin;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the full site route tree (public pages + admin panel).
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .merge(admin::router())
}
