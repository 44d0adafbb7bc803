//! Photo entry model and DTOs.

use patchup_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A before/after image reference attached to a project.
///
/// Many-to-one with `projects`; displayed ordered by `created_at` ascending.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub photo_path: String,
    pub tag: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a photo against a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhotoEntry {
    pub photo_path: String,
    pub tag: Option<String>,
}
