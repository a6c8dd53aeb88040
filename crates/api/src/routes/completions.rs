//! Route definitions for the completed-course list.

use axum::routing::get;
use axum::Router;

use crate::handlers::completions;
use crate::state::AppState;

/// Routes mounted at `/completions` (all require auth).
///
/// ```text
/// GET /  -> get_completions
/// PUT /  -> save_completions (union-merge)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(completions::get_completions).put(completions::save_completions),
    )
}
