//! Portfolio project models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
///
/// `gallery_images` is a Postgres `TEXT[]`; `None` and an empty array are
/// both valid "no gallery yet" states. References may point at files that no
/// longer exist on disk — readers must treat those as broken links, not
/// errors.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    /// Category code, expected in 1..=5 but not constrained; unknown codes
    /// classify to an unmapped label at read time.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub type_code: i16,
    pub project_name: String,
    pub description: Option<String>,
    /// Single representative image reference, shown in listings.
    pub thumbnail: Option<String>,
    /// Supplementary image references attached to the project.
    pub gallery_images: Option<Vec<String>>,
    pub created_at: Timestamp,
}

impl Project {
    /// Gallery references, treating an absent array as empty.
    pub fn gallery(&self) -> &[String] {
        self.gallery_images.as_deref().unwrap_or_default()
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub type_code: i16,
    pub project_name: String,
    pub description: Option<String>,
    /// Generated storage name of an already-written thumbnail file, if one
    /// was uploaded.
    pub thumbnail: Option<String>,
}

/// Listing order for [`crate::repositories::ProjectRepo::list`].
///
/// The three listing pages intentionally differ: home and admin portfolio
/// order by creation time ascending, the public portfolio by id descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectOrder {
    /// Oldest first (home listing, admin portfolio).
    CreatedAsc,
    /// Newest id first (public portfolio).
    IdDesc,
}

impl ProjectOrder {
    pub(crate) fn sql(self) -> &'static str {
        match self {
            ProjectOrder::CreatedAsc => "created_at ASC",
            ProjectOrder::IdDesc => "id DESC",
        }
    }
}
