//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `coursepath_db` (and, for
//! eligibility, to the pure engine in `coursepath_core`) and map errors
//! via [`crate::error::AppError`].

pub mod auth;
pub mod completions;
pub mod courses;
pub mod eligibility;
pub mod onboarding;
pub mod profile;
pub mod webhooks;
