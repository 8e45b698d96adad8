//! Directory-based blob storage for uploaded images.
//!
//! Files live in a flat directory (served statically at `/uploads`) and are
//! addressed by their generated storage name. The database stores names, not
//! paths; a name pointing at a missing file is rendered as a broken link,
//! never treated as fatal.

use std::io;
use std::path::{Path, PathBuf};

/// Flat-directory file store for uploaded images.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn ensure_root(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a stored file.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write a file under its storage name. An existing file with the same
    /// name is silently overwritten.
    pub async fn save(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        tokio::fs::write(self.path(name), bytes).await
    }

    /// Delete a stored file. A file that is already absent is not an error.
    pub async fn remove(&self, name: &str) -> io::Result<()> {
        match tokio::fs::remove_file(self.path(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.path(name)).await.unwrap_or(false)
    }
}
