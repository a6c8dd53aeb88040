//! Course entity model and DTOs.
//!
//! The `prerequisites` column is JSONB; [`CourseRow::into_course`]
//! normalizes anything that is not a string array to an empty list, so the
//! eligibility engine only ever sees well-formed prerequisite lists. That
//! normalization belongs here, in the catalog provider, not in core.

use coursepath_core::course::Course;
use coursepath_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full course row from the `courses` table.
#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub category: String,
    pub prerequisites: serde_json::Value,
    pub credits: Option<i32>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CourseRow {
    /// Convert to the domain [`Course`], normalizing the prerequisite list.
    ///
    /// Non-array JSONB values and non-string array elements are dropped.
    pub fn into_course(self) -> Course {
        Course {
            code: self.code,
            name: self.name,
            category: self.category,
            prerequisites: normalize_prerequisites(&self.prerequisites),
            credits: self.credits,
            description: self.description,
        }
    }
}

/// Extract a clean `Vec<String>` from a raw JSONB prerequisite value.
pub fn normalize_prerequisites(value: &serde_json::Value) -> Vec<String> {
    match value.as_array() {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        None => Vec::new(),
    }
}

/// DTO for creating a new course.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub code: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub credits: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    pub name: Option<String>,
    pub category: Option<String>,
    pub prerequisites: Option<Vec<String>>,
    pub credits: Option<i32>,
    pub description: Option<String>,
}
