use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use atelier_core::error::CoreError;

use crate::gallery::GalleryError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]; this is a server-rendered site, so error
/// bodies are plain text rather than JSON envelopes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `atelier-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A gallery upload that failed partway. The raw error text is sent back
    /// to the admin page so the failing step is visible.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<GalleryError> for AppError {
    fn from(err: GalleryError) -> Self {
        match err {
            GalleryError::Database(e) => AppError::Database(e),
            GalleryError::FileStore(e) => AppError::Internal(format!("File store error: {e}")),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },

            // Any database failure surfaces as a generic storage error; the
            // real cause goes to the server log only.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::UploadFailed(msg) => {
                tracing::error!(error = %msg, "Gallery upload failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, message).into_response()
    }
}
