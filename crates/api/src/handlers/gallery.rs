//! Gallery mutation endpoints: batch upload and batch removal.

use axum::extract::{Multipart, Path, State};
use axum::http::header::REFERER;
use axum::http::HeaderMap;
use axum::response::Redirect;

use atelier_core::types::DbId;
use atelier_core::upload;

use crate::error::{AppError, AppResult};
use crate::gallery::MAX_GALLERY_BATCH;
use crate::state::AppState;

/// POST /admin/add_details/{id}
///
/// Multipart field `images`, 1 to 10 files per submission. Files are written
/// to the store first, then the batch replaces the project's gallery column.
/// Failures surface as a 500 with the raw error text so the admin sees which
/// step broke.
pub async fn add_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let submitted_at = chrono::Utc::now();
    let mut batch: Vec<(String, axum::body::Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UploadFailed(e.to_string()))?
    {
        if field.name() != Some("images") {
            continue;
        }
        let original = field.file_name().unwrap_or_default().to_string();
        if original.is_empty() {
            continue;
        }
        if batch.len() == MAX_GALLERY_BATCH {
            return Err(AppError::BadRequest(format!(
                "Too many images: at most {MAX_GALLERY_BATCH} per upload"
            )));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::UploadFailed(e.to_string()))?;
        let base = original.rsplit(['/', '\\']).next().unwrap_or(&original);
        batch.push((upload::storage_name(submitted_at, base), data));
    }

    if batch.is_empty() {
        return Err(AppError::BadRequest("No images uploaded".into()));
    }

    // Store every file before any database mutation.
    let mut refs = Vec::with_capacity(batch.len());
    for (name, data) in &batch {
        state
            .files
            .save(name, data)
            .await
            .map_err(|e| AppError::UploadFailed(format!("Failed to store {name}: {e}")))?;
        refs.push(name.clone());
    }

    state.gallery.add_images(id, refs).await?;
    Ok(Redirect::to(&format!("/admin/single_project/{id}")))
}

/// POST /admin/projects/{id}/delete-images
///
/// Form field `images`, submitted once per selected reference. An empty
/// selection redirects back (Referer, falling back to the admin detail page)
/// without touching anything.
pub async fn delete_images(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
    axum::Form(fields): axum::Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let refs: Vec<String> = fields
        .into_iter()
        .filter(|(key, _)| key == "images")
        .map(|(_, value)| value)
        .collect();

    let detail = format!("/admin/single_project/{id}");

    if refs.is_empty() {
        let back = headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(&detail);
        return Ok(Redirect::to(back));
    }

    state.gallery.remove_images(id, &refs).await?;
    Ok(Redirect::to(&detail))
}
