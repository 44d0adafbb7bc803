//! Member profile model and DTOs.

use patchup_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A profile row from the `members` table.
///
/// One-to-one with an authenticated identity: `id` equals the owning
/// user's id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub profession_id: Option<DbId>,
    pub age: Option<i32>,
    pub area: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the idempotent insert-or-update keyed by member id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertMember {
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub profession_id: Option<DbId>,
    pub age: Option<i32>,
    pub area: Option<String>,
}
