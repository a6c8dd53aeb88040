//! Well-known role name constants.
//!
//! These must match the default and seed values in
//! `0001_create_users.sql`.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_ADMIN: &str = "admin";
