//! Repository for the `photo_entries` table.

use patchup_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo_entry::{CreatePhotoEntry, PhotoEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, photo_path, tag, created_at";

/// Provides photo listing and registration for projects.
pub struct PhotoRepo;

impl PhotoRepo {
    /// List photos for a project ordered by creation time ascending.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PhotoEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_entries WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, PhotoEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Register a photo path against a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreatePhotoEntry,
    ) -> Result<PhotoEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_entries (project_id, photo_path, tag)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoEntry>(&query)
            .bind(project_id)
            .bind(&input.photo_path)
            .bind(&input.tag)
            .fetch_one(pool)
            .await
    }
}
