//! Handlers for the authenticated user's completed-course list.
//!
//! Saving is a union: the submitted codes are merged with the stored set
//! via `merge_completed` and the merged list is re-persisted, so saving
//! from any screen never discards prior history.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use coursepath_core::course::Course;
use coursepath_core::eligibility::{merge_completed, total_credits};
use coursepath_db::repositories::{CompletionRepo, CourseRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /completions`.
#[derive(Debug, Deserialize)]
pub struct SaveCompletionsRequest {
    pub courses: Vec<String>,
}

/// The stored completed set, with catalog records resolved where possible.
#[derive(Debug, Serialize)]
pub struct CompletionsResponse {
    /// All stored codes, in saved order (including codes the catalog no
    /// longer carries).
    pub codes: Vec<String>,
    /// Full records for the codes the catalog resolves.
    pub courses: Vec<Course>,
    /// Credit sum over the resolved records; null credits count 0.
    pub total_credits: i64,
}

/// GET /api/v1/completions
///
/// The authenticated user's completed set.
pub async fn get_completions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let codes = CompletionRepo::list_codes(&state.pool, auth.user_id).await?;
    let courses = CourseRepo::find_by_codes(&state.pool, &codes).await?;
    let total_credits = total_credits(&courses);

    Ok(Json(DataResponse {
        data: CompletionsResponse {
            codes,
            courses,
            total_credits,
        },
    }))
}

/// PUT /api/v1/completions
///
/// Union-merge the submitted codes into the stored set and persist the
/// merged list. Returns the updated set.
pub async fn save_completions(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveCompletionsRequest>,
) -> AppResult<impl IntoResponse> {
    let existing = CompletionRepo::list_codes(&state.pool, auth.user_id).await?;
    let merged = merge_completed(&existing, &input.courses);

    CompletionRepo::replace(&state.pool, auth.user_id, &merged).await?;

    tracing::info!(
        user_id = auth.user_id,
        saved = merged.len(),
        added = merged.len() - existing.len(),
        "Completed courses saved"
    );

    let courses = CourseRepo::find_by_codes(&state.pool, &merged).await?;
    let total_credits = total_credits(&courses);

    Ok(Json(DataResponse {
        data: CompletionsResponse {
            codes: merged,
            courses,
            total_credits,
        },
    }))
}
