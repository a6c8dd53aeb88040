//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod completion_repo;
pub mod course_repo;
pub mod session_repo;
pub mod user_repo;

pub use completion_repo::CompletionRepo;
pub use course_repo::CourseRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
