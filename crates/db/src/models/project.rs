//! Project entity model and DTOs.

use patchup_core::filter::ProjectFacets;
use patchup_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A community work-order row from the `projects` table.
///
/// The order of `roles_required` is the canonical display order of roles on
/// the detail page and must be preserved end to end.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub category: String,
    pub details: Option<String>,
    pub tools_needed: Vec<String>,
    pub roles_required: Vec<DbId>,
    pub created_by: Option<DbId>,
    pub created_on: Timestamp,
    pub completed_on: Option<Timestamp>,
    pub outcome: Option<String>,
}

impl ProjectFacets for Project {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &str {
        &self.location
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn tools_needed(&self) -> &[String] {
        &self.tools_needed
    }
    fn roles_required(&self) -> &[DbId] {
        &self.roles_required
    }
}

/// DTO for inserting a new project. Expected to be normalized and validated
/// (via `patchup_core::project::ProjectDraft`) before it reaches the repo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub location: String,
    pub category: String,
    pub details: Option<String>,
    pub tools_needed: Vec<String>,
    pub roles_required: Vec<DbId>,
    pub created_by: Option<DbId>,
}
