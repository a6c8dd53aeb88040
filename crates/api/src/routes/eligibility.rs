//! Route definitions for eligibility computation.

use axum::routing::get;
use axum::Router;

use crate::handlers::eligibility;
use crate::state::AppState;

/// Routes mounted at `/eligibility`.
///
/// ```text
/// POST /  -> compute_eligibility (explicit completed set, public)
/// GET  /  -> my_eligibility (stored set, requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(eligibility::my_eligibility).post(eligibility::compute_eligibility),
    )
}
