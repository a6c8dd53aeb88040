//! Catalog course record.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `code` is the stable primary key of a catalog snapshot (unique,
/// case-sensitive). Prerequisite codes are opaque tokens compared exactly
/// against a user's completed set; a code that appears nowhere in the
/// catalog is simply never satisfiable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Short unique identifier, e.g. `"CSC101"`.
    pub code: String,
    /// Human-readable title.
    pub name: String,
    /// Free-form grouping label used only for filtering.
    pub category: String,
    /// Course codes that must all be completed before this course unlocks.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Credit weight; `None` contributes 0 to aggregate totals.
    #[serde(default)]
    pub credits: Option<i32>,
    /// Free text with no role in eligibility.
    #[serde(default)]
    pub description: Option<String>,
}
