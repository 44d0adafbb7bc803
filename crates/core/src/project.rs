//! Project draft normalization, validation, and detail-page helpers.

use crate::error::CoreError;
use crate::types::DbId;

/// An editable project draft as submitted by a client, before normalization.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub name: String,
    pub location: String,
    pub category: String,
    pub details: Option<String>,
    pub tools_needed: Vec<String>,
    pub roles_required: Vec<DbId>,
}

impl ProjectDraft {
    /// Normalize the draft in place: trim the text fields, collapse an
    /// empty `details` to `None`, and drop empty tool entries.
    pub fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.location = self.location.trim().to_string();
        self.category = self.category.trim().to_string();
        self.details = self
            .details
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self.tools_needed = self
            .tools_needed
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Validate a normalized draft. Checked locally before any database
    /// call is issued; a failing draft must never reach the insert path.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::validation("Name is required."));
        }
        if self.location.is_empty() {
            return Err(CoreError::validation("Location is required."));
        }
        if self.category.is_empty() {
            return Err(CoreError::validation("Category is required."));
        }
        if self.roles_required.is_empty() {
            return Err(CoreError::validation("Pick at least one role."));
        }
        Ok(())
    }
}

/// Split a comma-separated tool list into trimmed, non-empty entries.
pub fn parse_tool_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Order fetched profession titles by the project's `roles_required` order.
///
/// The fetch returns `(id, title)` pairs in arbitrary order; the project's
/// `roles_required` sequence defines the canonical display order. Ids absent
/// from `fetched` are silently dropped (the label cannot be resolved).
pub fn resolve_role_titles(roles_required: &[DbId], fetched: &[(DbId, String)]) -> Vec<String> {
    roles_required
        .iter()
        .filter_map(|id| {
            fetched
                .iter()
                .find(|(fid, _)| fid == id)
                .map(|(_, title)| title.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            name: "  Fence repair ".to_string(),
            location: " Ibadan - Bodija ".to_string(),
            category: "school".to_string(),
            details: Some("   ".to_string()),
            tools_needed: vec!["hammer ".to_string(), "  ".to_string(), " paint".to_string()],
            roles_required: vec![1],
        }
    }

    #[test]
    fn normalize_trims_and_drops_empties() {
        let d = draft().normalize();
        assert_eq!(d.name, "Fence repair");
        assert_eq!(d.location, "Ibadan - Bodija");
        assert_eq!(d.details, None, "blank details collapse to None");
        assert_eq!(d.tools_needed, vec!["hammer", "paint"]);
    }

    #[test]
    fn validate_rejects_empty_roles() {
        let mut d = draft().normalize();
        d.roles_required.clear();

        let err = d.validate().unwrap_err();
        assert!(
            err.to_string().contains("Pick at least one role."),
            "got: {err}"
        );
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut d = draft().normalize();
        d.name.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(draft().normalize().validate().is_ok());
    }

    #[test]
    fn parse_tool_list_splits_and_trims() {
        assert_eq!(
            parse_tool_list("hammer, paint , ,sandpaper"),
            vec!["hammer", "paint", "sandpaper"]
        );
        assert!(parse_tool_list("  ").is_empty());
    }

    #[test]
    fn role_titles_follow_roles_required_order() {
        let fetched = vec![
            (1, "Carpenter".to_string()),
            (2, "Painter".to_string()),
            (3, "Mason".to_string()),
        ];

        // roles_required = [3,1,2] with an arbitrary fetch order.
        let titles = resolve_role_titles(&[3, 1, 2], &fetched);
        assert_eq!(titles, vec!["Mason", "Carpenter", "Painter"]);
    }

    #[test]
    fn unresolved_role_ids_are_dropped() {
        let fetched = vec![(1, "Carpenter".to_string())];
        let titles = resolve_role_titles(&[7, 1], &fetched);
        assert_eq!(titles, vec!["Carpenter"]);
    }
}
