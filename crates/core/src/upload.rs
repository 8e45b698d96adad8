//! Storage naming for uploaded files.
//!
//! Every uploaded file is stored under `<submission-millis>-<original-name>`
//! and the generated name, not the original one, is what gets referenced
//! from the database. One timestamp is captured per submission, so a batch
//! upload shares a single prefix. Collisions are extremely unlikely given
//! millisecond prefixing and are not detected; a collision silently
//! overwrites the earlier file (accepted, documented limitation).

use crate::types::Timestamp;

/// Build the storage name for an uploaded file.
pub fn storage_name(submitted_at: Timestamp, original_name: &str) -> String {
    format!("{}-{}", submitted_at.timestamp_millis(), original_name)
}
