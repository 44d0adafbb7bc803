//! Profession (selectable role) reference data.

use patchup_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `professions` table. Static reference data, read-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profession {
    pub id: DbId,
    pub title: String,
}
