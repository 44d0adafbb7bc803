//! Patchup domain logic.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API server, and any future CLI tooling. It holds
//! the shared primitive types, the domain error taxonomy, and the pure
//! computations of the platform: project list filtering, project draft
//! normalization/validation, role-title ordering, and member profile
//! normalization.

pub mod error;
pub mod filter;
pub mod member;
pub mod project;
pub mod types;

pub use error::CoreError;
