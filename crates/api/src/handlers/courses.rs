//! Handlers for the course catalog.
//!
//! The read side is public: the catalog and its category labels are not
//! user-specific. The write side (create, update, delete) is the catalog
//! provider's admin surface and requires the `admin` role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use coursepath_core::error::CoreError;
use coursepath_core::types::DbId;
use coursepath_db::models::course::{CreateCourse, UpdateCourse};
use coursepath_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public catalog reads
// ---------------------------------------------------------------------------

/// GET /api/v1/courses
///
/// The full catalog, in catalog order, prerequisites normalized.
pub async fn list_courses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let catalog = CourseRepo::list_catalog(&state.pool).await?;
    Ok(Json(DataResponse { data: catalog }))
}

/// GET /api/v1/courses/categories
///
/// Distinct category labels, alphabetically.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CourseRepo::list_categories(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

// ---------------------------------------------------------------------------
// Admin catalog writes
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/courses
///
/// Add a course to the catalog. Admin only.
pub async fn create_course(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    validate_course_fields(&input.code, &input.name, &input.category, input.credits)?;

    // Duplicate codes surface as 409 via uq_courses_code.
    let row = CourseRepo::create(&state.pool, &input).await?;

    tracing::info!(course_id = row.id, code = %row.code, user_id = admin.user_id, "Course created");

    let course = row.into_course();
    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// PUT /api/v1/admin/courses/{id}
///
/// Update a course's fields. Admin only. The code itself is immutable --
/// completed sets reference it.
pub async fn update_course(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    if let Some(credits) = input.credits {
        if credits < 0 {
            return Err(AppError::BadRequest("credits must be non-negative".into()));
        }
    }

    let row = CourseRepo::update(&state.pool, course_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    tracing::info!(course_id, user_id = admin.user_id, "Course updated");

    let course = row.into_course();
    Ok(Json(DataResponse { data: course }))
}

/// DELETE /api/v1/admin/courses/{id}
///
/// Remove a course from the catalog. Admin only. Returns 204 No Content.
pub async fn delete_course(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, course_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }

    tracing::info!(course_id, user_id = admin.user_id, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Reject empty identifying fields and negative credits.
fn validate_course_fields(
    code: &str,
    name: &str,
    category: &str,
    credits: Option<i32>,
) -> AppResult<()> {
    if code.trim().is_empty() {
        return Err(AppError::BadRequest("code must not be empty".into()));
    }
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if category.trim().is_empty() {
        return Err(AppError::BadRequest("category must not be empty".into()));
    }
    if let Some(credits) = credits {
        if credits < 0 {
            return Err(AppError::BadRequest("credits must be non-negative".into()));
        }
    }
    Ok(())
}
