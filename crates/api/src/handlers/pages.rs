//! Public site pages: home listing, portfolio, and project detail.

use axum::extract::{Path, State};
use axum::response::Html;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::project::ProjectOrder;
use atelier_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, PageContext, ProjectCard};

/// GET /
///
/// Home listing, oldest first.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = ProjectRepo::list(&state.pool, ProjectOrder::CreatedAsc).await?;
    let cards: Vec<ProjectCard> = projects.iter().map(ProjectCard::from).collect();
    Ok(Html(views::home_page(&PageContext::new("/"), &cards)))
}

/// GET /portfolio
///
/// Public portfolio, newest id first.
pub async fn portfolio(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = ProjectRepo::list(&state.pool, ProjectOrder::IdDesc).await?;
    let cards: Vec<ProjectCard> = projects.iter().map(ProjectCard::from).collect();
    Ok(Html(views::portfolio_page(
        &PageContext::new("/portfolio"),
        &cards,
    )))
}

/// GET /single_project/{id}
pub async fn single_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let ctx = PageContext::new(format!("/single_project/{id}"));
    Ok(Html(views::project_detail_page(&ctx, &project)))
}
