use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::config::ServerConfig;
use crate::files::FileStore;
use crate::gallery::GalleryManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Blob storage for uploaded images.
    pub files: Arc<FileStore>,
    /// Keeps gallery references and stored files in lockstep.
    pub gallery: Arc<GalleryManager>,
    /// Admin credential verification.
    pub verifier: Arc<dyn CredentialVerifier>,
}
