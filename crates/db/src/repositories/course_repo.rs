//! Repository for the `courses` table.
//!
//! The catalog read path returns domain [`Course`] records with
//! prerequisites already normalized (see `models::course`), so everything
//! downstream of this repository sees clean data. Catalog order is
//! insertion order (`ORDER BY id`), which is also the order eligibility
//! results come back in.

use coursepath_core::course::Course;
use coursepath_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{CourseRow, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, code, name, category, prerequisites, credits, description, created_at, updated_at";

/// Provides CRUD operations for catalog courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<CourseRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (code, name, category, prerequisites, credits, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.category)
            .bind(serde_json::json!(input.prerequisites))
            .bind(input.credits)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a course row by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CourseRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the full catalog snapshot in catalog (insertion) order.
    pub async fn list_catalog(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id");
        let rows = sqlx::query_as::<_, CourseRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    /// Load the courses matching the given codes, in catalog order.
    ///
    /// Codes with no catalog entry are silently absent from the result.
    pub async fn find_by_codes(
        pool: &PgPool,
        codes: &[String],
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE code = ANY($1) ORDER BY id");
        let rows = sqlx::query_as::<_, CourseRow>(&query)
            .bind(codes)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    /// List the distinct category labels in the catalog, alphabetically.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT category FROM courses ORDER BY category")
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(category,)| category).collect())
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<CourseRow>, sqlx::Error> {
        let prerequisites = input.prerequisites.as_ref().map(|p| serde_json::json!(p));
        let query = format!(
            "UPDATE courses SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                prerequisites = COALESCE($4, prerequisites),
                credits = COALESCE($5, credits),
                description = COALESCE($6, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(prerequisites)
            .bind(input.credits)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
