//! Admin pages plus project create/delete.

use axum::extract::{Multipart, Path, State};
use axum::response::{Html, Redirect};

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_core::upload;
use atelier_db::models::project::{CreateProject, Project, ProjectOrder};
use atelier_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{self, PageContext, ProjectCard};

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// GET /admin
pub async fn index() -> Html<String> {
    Html(views::admin_index_page(&PageContext::new("/admin")))
}

/// GET /admin/portfolio
///
/// Admin listing, oldest first (same order as the home page, unlike the
/// public portfolio).
pub async fn portfolio(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = ProjectRepo::list(&state.pool, ProjectOrder::CreatedAsc).await?;
    let cards: Vec<ProjectCard> = projects.iter().map(ProjectCard::from).collect();
    Ok(Html(views::admin_portfolio_page(
        &PageContext::new("/admin/portfolio"),
        &cards,
    )))
}

/// GET /admin/single_project/{id}
pub async fn single_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let project = find_or_404(&state, id).await?;
    let ctx = PageContext::new(format!("/admin/single_project/{id}"));
    Ok(Html(views::admin_project_page(&ctx, &project)))
}

/// GET /admin/single_project/{id}/add_details
pub async fn add_details_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let project = find_or_404(&state, id).await?;
    let ctx = PageContext::new(format!("/admin/single_project/{id}/add_details"));
    Ok(Html(views::add_details_page(&ctx, &project)))
}

/// POST /addproject
///
/// Multipart submission: `type`, `projectName`, optional `description`, and
/// an optional `thumbnail` file. The thumbnail is written to the file store
/// before the row is inserted; there is no rollback if the insert fails.
pub async fn create_project(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let submitted_at = chrono::Utc::now();
    let mut type_code: Option<i16> = None;
    let mut project_name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut thumbnail: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                type_code = Some(text.trim().parse().map_err(|_| {
                    AppError::BadRequest(format!("type must be an integer, got '{text}'"))
                })?);
            }
            "projectName" => {
                project_name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            "thumbnail" => {
                // Browsers send an empty part when no file was chosen.
                let original = field.file_name().unwrap_or_default().to_string();
                if original.is_empty() {
                    continue;
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let base = original.rsplit(['/', '\\']).next().unwrap_or(&original);
                let stored = upload::storage_name(submitted_at, base);
                state
                    .files
                    .save(&stored, &data)
                    .await
                    .map_err(|e| AppError::Internal(format!("Failed to store thumbnail: {e}")))?;
                thumbnail = Some(stored);
            }
            _ => {}
        }
    }

    let input = CreateProject {
        type_code: type_code
            .ok_or_else(|| AppError::BadRequest("Missing form field: type".into()))?,
        project_name: project_name
            .ok_or_else(|| AppError::BadRequest("Missing form field: projectName".into()))?,
        description,
        thumbnail,
    };

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, "Project added");
    Ok(Redirect::to("/admin"))
}

/// POST /admin/delete-project/{id}
///
/// Deletes the thumbnail and all gallery files before the row, tolerating
/// files that are already gone. A missing id is a no-op; either way the
/// response is a redirect back to the admin portfolio.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if let Some(project) = ProjectRepo::find_by_id(&state.pool, id).await? {
        if let Some(thumb) = &project.thumbnail {
            state
                .files
                .remove(thumb)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to remove thumbnail: {e}")))?;
        }
        for name in project.gallery() {
            state
                .files
                .remove(name)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to remove gallery file: {e}")))?;
        }
        ProjectRepo::delete(&state.pool, id).await?;
        tracing::info!(id, "Project deleted");
    }
    Ok(Redirect::to("/admin/portfolio"))
}
