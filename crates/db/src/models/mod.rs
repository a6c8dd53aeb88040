//! Row models and DTOs.
//!
//! Row structs derive `sqlx::FromRow` and mirror table columns exactly;
//! Create/Update DTOs carry only the caller-supplied fields.

pub mod completion;
pub mod course;
pub mod session;
pub mod user;
