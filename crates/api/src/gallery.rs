//! Gallery manager: keeps a project's `gallery_images` references and the
//! file store contents in lockstep.
//!
//! There is no transaction spanning the two stores. Removal deletes files
//! before touching the database, so a failure in between leaves a row
//! referencing missing files; reads tolerate that (broken link, not a
//! crash). Concurrent mutations on the same project are not serialized and
//! resolve as last-write-wins on the array column.

use std::sync::Arc;

use atelier_core::types::DbId;
use atelier_db::repositories::ProjectRepo;
use atelier_db::DbPool;

use crate::files::FileStore;

/// Largest accepted upload batch per gallery submission.
pub const MAX_GALLERY_BATCH: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("file store error: {0}")]
    FileStore(#[from] std::io::Error),
}

/// Coordinates gallery reference updates with file store mutations.
pub struct GalleryManager {
    pool: DbPool,
    files: Arc<FileStore>,
}

impl GalleryManager {
    pub fn new(pool: DbPool, files: Arc<FileStore>) -> Self {
        Self { pool, files }
    }

    /// Attach a batch of already-stored file references to a project.
    ///
    /// The column is set to exactly `refs`: a new batch replaces whatever
    /// gallery the project had. Returns the resulting reference list.
    pub async fn add_images(
        &self,
        project_id: DbId,
        refs: Vec<String>,
    ) -> Result<Vec<String>, GalleryError> {
        ProjectRepo::replace_gallery(&self.pool, project_id, &refs).await?;
        tracing::info!(project_id, count = refs.len(), "Gallery images added");
        Ok(refs)
    }

    /// Remove a set of references from a project's gallery.
    ///
    /// An empty `refs` is a pure no-op: no file or database operation runs.
    /// Otherwise each named file is deleted from the store (already-absent
    /// files are ignored), then the column is recomputed as a set difference.
    pub async fn remove_images(&self, project_id: DbId, refs: &[String]) -> Result<(), GalleryError> {
        if refs.is_empty() {
            return Ok(());
        }

        // Files first. If the database update below fails the row keeps
        // referencing deleted files, which readers must tolerate.
        for name in refs {
            self.files.remove(name).await?;
        }

        ProjectRepo::remove_gallery_refs(&self.pool, project_id, refs).await?;
        tracing::info!(project_id, count = refs.len(), "Gallery images removed");
        Ok(())
    }
}
