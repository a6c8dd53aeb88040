//! Handlers for the onboarding flow's backend.
//!
//! The wizard UI itself lives in the frontend; these endpoints report
//! whether a user has finished onboarding and persist the wizard's final
//! payload (profile fields + initially completed courses) in one shot.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use coursepath_core::eligibility::merge_completed;
use coursepath_core::error::CoreError;
use coursepath_db::models::user::UpdateProfile;
use coursepath_db::repositories::{CompletionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /onboarding`.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub name: String,
    pub college_year: String,
    pub major: String,
    #[serde(default)]
    pub completed_courses: Vec<String>,
}

/// Response body for `GET /onboarding`.
#[derive(Debug, Serialize)]
pub struct OnboardingStatus {
    pub onboarding_completed: bool,
}

/// GET /api/v1/onboarding
///
/// Whether the authenticated user has completed onboarding.
pub async fn get_status(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let completed = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .map(|user| user.onboarding_completed)
        .unwrap_or(false);

    Ok(Json(DataResponse {
        data: OnboardingStatus {
            onboarding_completed: completed,
        },
    }))
}

/// POST /api/v1/onboarding
///
/// Persist the onboarding payload: profile fields are required, the
/// initial completed-course list is optional and goes through the same
/// union-merge path as any other save.
pub async fn complete_onboarding(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<OnboardingRequest>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty()
        || input.college_year.trim().is_empty()
        || input.major.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "name, college_year, and major are required".into(),
        ));
    }

    let profile = UpdateProfile {
        name: Some(input.name.trim().to_string()),
        college_year: Some(input.college_year.trim().to_string()),
        major: Some(input.major.trim().to_string()),
    };
    UserRepo::update_profile(&state.pool, auth.user_id, &profile)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let existing = CompletionRepo::list_codes(&state.pool, auth.user_id).await?;
    let merged = merge_completed(&existing, &input.completed_courses);
    CompletionRepo::replace(&state.pool, auth.user_id, &merged).await?;

    UserRepo::mark_onboarding_completed(&state.pool, auth.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        completed_courses = merged.len(),
        "Onboarding completed"
    );

    Ok(Json(DataResponse {
        data: OnboardingStatus {
            onboarding_completed: true,
        },
    }))
}
