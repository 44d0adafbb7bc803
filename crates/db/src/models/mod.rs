//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO for writes

pub mod member;
pub mod photo_entry;
pub mod profession;
pub mod project;
pub mod session;
pub mod user;
