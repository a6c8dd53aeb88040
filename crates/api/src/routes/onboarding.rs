//! Route definitions for onboarding.

use axum::routing::get;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding` (all require auth).
///
/// ```text
/// GET  /  -> get_status
/// POST /  -> complete_onboarding
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(onboarding::get_status).post(onboarding::complete_onboarding),
    )
}
