//! Authentication building blocks: JWT access tokens, refresh-token
//! helpers, and argon2 password hashing.

pub mod jwt;
pub mod password;
