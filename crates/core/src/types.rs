//! Primitive aliases shared by every crate in the workspace.

/// Primary key type; every table uses PostgreSQL `BIGSERIAL`.
pub type DbId = i64;

/// UTC wall-clock timestamp (`TIMESTAMPTZ` on the wire).
pub type Timestamp = chrono::DateTime<chrono::Utc>;
