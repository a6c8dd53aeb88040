//! Pure domain logic for the coursepath backend.
//!
//! This crate has no database or HTTP dependencies. The eligibility engine
//! ([`eligibility`]) operates on pre-loaded snapshots passed in by the
//! caller; persistence and request handling live in `coursepath-db` and
//! `coursepath-api`.

pub mod course;
pub mod eligibility;
pub mod error;
pub mod roles;
pub mod types;
pub mod webhook;
