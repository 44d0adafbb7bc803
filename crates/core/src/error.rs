//! Domain error taxonomy.
//!
//! Mirrors the outcomes the HTTP layer needs to distinguish; the api crate
//! maps each variant onto a status code and a `{ "error", "code" }` body.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id came back empty.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A draft failed a local check. Raised before any database call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write collides with existing state (e.g. a duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure with the given user-facing message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
