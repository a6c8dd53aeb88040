//! Route definitions for webhook ingestion.

use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

/// Routes mounted at `/webhooks` (HMAC-signed, no Bearer auth).
///
/// ```text
/// POST /identity  -> identity_sync
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/identity", post(webhooks::identity_sync))
}
