//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod member_repo;
pub mod photo_repo;
pub mod profession_repo;
pub mod project_repo;
pub mod session_repo;
pub mod user_repo;

pub use member_repo::MemberRepo;
pub use photo_repo::PhotoRepo;
pub use profession_repo::ProfessionRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
