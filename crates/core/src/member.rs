//! Member profile draft normalization.

use crate::error::CoreError;
use crate::types::DbId;

/// Role assigned to a profile when the draft leaves it blank.
pub const DEFAULT_MEMBER_ROLE: &str = "member";

/// An editable member profile draft.
///
/// Optional fields use explicit `Option`s rather than sentinel empty
/// strings; [`MemberDraft::normalize`] collapses blank submissions into
/// `None` so the stored record is canonical and the upsert idempotent.
#[derive(Debug, Clone)]
pub struct MemberDraft {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub profession_id: Option<DbId>,
    pub age: Option<i32>,
    pub area: Option<String>,
}

impl MemberDraft {
    /// Normalize the draft: trim text fields, collapse empty strings to
    /// `None`, and fill in the default role.
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.name = normalize_optional(self.name);
        self.area = normalize_optional(self.area);
        self.role = Some(
            normalize_optional(self.role).unwrap_or_else(|| DEFAULT_MEMBER_ROLE.to_string()),
        );
        self
    }

    /// Validate a normalized draft before it is written.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.email.is_empty() {
            return Err(CoreError::validation("Email is required."));
        }
        if let Some(age) = self.age {
            if !(0..=150).contains(&age) {
                return Err(CoreError::validation("Age is out of range."));
            }
        }
        Ok(())
    }
}

/// Trim an optional string and collapse blanks to `None`.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MemberDraft {
        MemberDraft {
            email: " ada@example.com ".to_string(),
            name: Some("  ".to_string()),
            role: None,
            profession_id: Some(3),
            age: Some(29),
            area: Some(" Bodija ".to_string()),
        }
    }

    #[test]
    fn normalize_collapses_blanks_and_defaults_role() {
        let d = draft().normalize();
        assert_eq!(d.email, "ada@example.com");
        assert_eq!(d.name, None);
        assert_eq!(d.role.as_deref(), Some("member"));
        assert_eq!(d.area.as_deref(), Some("Bodija"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = draft().normalize();
        let twice = once.clone().normalize();
        assert_eq!(format!("{once:?}"), format!("{twice:?}"));
    }

    #[test]
    fn validate_requires_email() {
        let mut d = draft().normalize();
        d.email.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn validate_bounds_age() {
        let mut d = draft().normalize();
        d.age = Some(200);
        assert!(d.validate().is_err());
        d.age = Some(35);
        assert!(d.validate().is_ok());
    }
}
