//! HTTP handlers, one module per resource.

pub mod auth;
pub mod members;
pub mod professions;
pub mod projects;
