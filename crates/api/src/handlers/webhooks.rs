//! Handler for identity-directory webhook ingestion.
//!
//! The campus identity directory pushes `user.created` / `user.updated`
//! events carrying profile fields (email, display name, avatar). We apply
//! them to the matching local account; any other event type is
//! acknowledged and ignored. Deliveries are authenticated by HMAC
//! signature, not by a user token, so this endpoint sits outside the
//! Bearer-auth surface.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use coursepath_core::webhook::verify_signature;
use coursepath_db::models::user::DirectoryProfile;
use coursepath_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Header carrying the delivery's Unix timestamp.
const TIMESTAMP_HEADER: &str = "x-webhook-timestamp";
/// Header carrying the hex HMAC-SHA256 signature.
const SIGNATURE_HEADER: &str = "x-webhook-signature";

/// An identity-directory event envelope.
#[derive(Debug, Deserialize)]
pub struct DirectoryEvent {
    /// Event type, e.g. `"user.created"`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: DirectoryEventData,
}

/// Profile payload of a directory event.
#[derive(Debug, Deserialize)]
pub struct DirectoryEventData {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Acknowledgement body.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub synced: bool,
}

/// POST /api/v1/webhooks/identity
///
/// Verify the delivery signature, then apply `user.created` /
/// `user.updated` profile payloads by email. Returns `{ "synced": false }`
/// for ignored event types and for emails with no local account.
pub async fn identity_sync(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> AppResult<impl IntoResponse> {
    let timestamp: i64 = header_value(&headers, TIMESTAMP_HEADER)?
        .parse()
        .map_err(|_| AppError::BadRequest("invalid webhook timestamp".into()))?;
    let signature = header_value(&headers, SIGNATURE_HEADER)?;

    // Verify against the raw body before parsing anything out of it.
    verify_signature(&state.config.webhook_secret, timestamp, &body, &signature)?;

    let event: DirectoryEvent = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid event payload: {e}")))?;

    if event.event_type != "user.created" && event.event_type != "user.updated" {
        tracing::debug!(event_type = %event.event_type, "Ignoring directory event");
        return Ok(Json(DataResponse {
            data: WebhookAck { synced: false },
        }));
    }

    let profile = DirectoryProfile {
        email: event.data.email,
        name: event.data.name,
        avatar_url: event.data.avatar_url,
    };
    let synced = UserRepo::sync_directory_profile(&state.pool, &profile).await?;

    tracing::info!(
        event_type = %event.event_type,
        email = %profile.email,
        synced,
        "Directory event processed"
    );

    Ok(Json(DataResponse {
        data: WebhookAck { synced },
    }))
}

fn header_value(headers: &HeaderMap, name: &str) -> AppResult<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest(format!("missing {name} header")))
}
