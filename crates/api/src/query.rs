//! Shared query parameter types for API handlers.

use std::collections::HashSet;

use patchup_core::filter::ProjectFilter;
use patchup_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /projects` (`?q=&roles=1,2&tool=`).
///
/// All parameters are optional; an omitted or empty parameter leaves the
/// corresponding criterion inactive.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    /// Free-text query over name, location, and category.
    pub q: Option<String>,
    /// Comma-separated profession ids; unparsable entries are ignored.
    pub roles: Option<String>,
    /// Tool substring.
    pub tool: Option<String>,
}

impl ProjectListParams {
    /// Build the filter criteria these parameters describe.
    pub fn into_filter(self) -> ProjectFilter {
        let role_ids: HashSet<DbId> = self
            .roles
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect();

        ProjectFilter {
            text: self.q.unwrap_or_default(),
            role_ids,
            tool: self.tool.unwrap_or_default(),
        }
    }
}
