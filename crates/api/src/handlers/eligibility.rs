//! Handlers for eligibility computation.
//!
//! Both endpoints load a fresh catalog snapshot, hand it to the pure
//! engine in `coursepath_core::eligibility`, and return the result --
//! nothing is cached or persisted. Malformed request bodies (e.g.
//! `completed_courses` not an array of strings) are rejected by the typed
//! extractor before the engine is ever invoked.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use coursepath_core::eligibility::eligible_courses;
use coursepath_db::repositories::{CompletionRepo, CourseRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /eligibility`.
#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    /// Completed course codes, compared as opaque case-sensitive tokens.
    #[serde(default)]
    pub completed_courses: Vec<String>,
    /// Optional exact-match category filter.
    #[serde(default)]
    pub category: Option<String>,
}

/// Query parameters for `GET /eligibility`.
#[derive(Debug, Deserialize)]
pub struct EligibilityParams {
    #[serde(default)]
    pub category: Option<String>,
}

/// POST /api/v1/eligibility
///
/// Compute eligible courses for an explicitly supplied completed set.
/// Public: the completed set travels in the request, so no identity is
/// needed.
pub async fn compute_eligibility(
    State(state): State<AppState>,
    Json(input): Json<EligibilityRequest>,
) -> AppResult<impl IntoResponse> {
    let catalog = CourseRepo::list_catalog(&state.pool).await?;
    let eligible = eligible_courses(&catalog, &input.completed_courses, input.category.as_deref());

    Ok(Json(DataResponse { data: eligible }))
}

/// GET /api/v1/eligibility?category=
///
/// Compute eligible courses for the authenticated user's stored completed
/// set, read fresh for this request.
pub async fn my_eligibility(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<EligibilityParams>,
) -> AppResult<impl IntoResponse> {
    let completed = CompletionRepo::list_codes(&state.pool, auth.user_id).await?;
    let catalog = CourseRepo::list_catalog(&state.pool).await?;
    let eligible = eligible_courses(&catalog, &completed, params.category.as_deref());

    Ok(Json(DataResponse { data: eligible }))
}
