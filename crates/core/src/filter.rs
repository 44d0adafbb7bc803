//! Project list filtering.
//!
//! Filtering is a pure computation over an already-fetched snapshot of
//! projects; it never touches the database. Criteria combine conjunctively:
//! a project is included iff it passes every *active* criterion, and a
//! criterion whose value is empty (after trimming) is treated as satisfied.
//! Within the role and tool criteria the match is existential over the
//! project's arrays. The input order is preserved -- ordering is decided by
//! the upstream fetch (`created_on` descending), not here.

use std::collections::HashSet;

use crate::types::DbId;

/// Read-only view of the project fields the filter inspects.
///
/// Implemented by the `projects` row type in the db crate; keeping the
/// filter generic over this trait lets the pure core stay free of sqlx.
pub trait ProjectFacets {
    fn name(&self) -> &str;
    fn location(&self) -> &str;
    fn category(&self) -> &str;
    fn tools_needed(&self) -> &[String];
    fn roles_required(&self) -> &[DbId];
}

/// Active filter criteria for the project list.
///
/// Ephemeral -- built per request, never persisted.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Free-text query matched against name, location, and category.
    pub text: String,
    /// Selected profession ids; a project passes if *any* of its required
    /// roles is in this set.
    pub role_ids: HashSet<DbId>,
    /// Substring matched against each entry of `tools_needed`.
    pub tool: String,
}

impl ProjectFilter {
    /// Whether any criterion constrains the result.
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty() || !self.role_ids.is_empty() || !self.tool.trim().is_empty()
    }

    /// Whether `project` passes every active criterion.
    pub fn matches<P: ProjectFacets>(&self, project: &P) -> bool {
        self.matches_text(project) && self.matches_roles(project) && self.matches_tool(project)
    }

    /// Case-insensitive substring match over name OR location OR category.
    fn matches_text<P: ProjectFacets>(&self, project: &P) -> bool {
        let text = self.text.trim();
        if text.is_empty() {
            return true;
        }
        contains_ignore_case(project.name(), text)
            || contains_ignore_case(project.location(), text)
            || contains_ignore_case(project.category(), text)
    }

    /// Non-empty intersection between `roles_required` and the selected set.
    fn matches_roles<P: ProjectFacets>(&self, project: &P) -> bool {
        if self.role_ids.is_empty() {
            return true;
        }
        project
            .roles_required()
            .iter()
            .any(|id| self.role_ids.contains(id))
    }

    /// Some entry of `tools_needed` contains the substring, case-insensitive.
    fn matches_tool<P: ProjectFacets>(&self, project: &P) -> bool {
        let tool = self.tool.trim();
        if tool.is_empty() {
            return true;
        }
        project
            .tools_needed()
            .iter()
            .any(|t| contains_ignore_case(t, tool))
    }
}

/// Return the ordered subsequence of `projects` passing every active
/// criterion of `filter`. With an inactive filter this is the identity.
pub fn filter_projects<'a, P: ProjectFacets>(
    projects: &'a [P],
    filter: &ProjectFilter,
) -> Vec<&'a P> {
    projects.iter().filter(|p| filter.matches(*p)).collect()
}

/// Case-insensitive substring test.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
