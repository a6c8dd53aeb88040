pub mod auth;
pub mod completions;
pub mod courses;
pub mod eligibility;
pub mod health;
pub mod onboarding;
pub mod profile;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /courses                       catalog list (public)
/// /courses/categories            distinct categories (public)
///
/// /eligibility                   POST: explicit completed set (public)
///                                GET:  stored set (requires auth)
///
/// /completions                   get, save (requires auth)
///
/// /profile                       get, update (requires auth)
///
/// /onboarding                    status, complete (requires auth)
///
/// /admin/courses                 create (admin only)
/// /admin/courses/{id}            update, delete (admin only)
///
/// /webhooks/identity             directory sync (HMAC-signed)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes.
        .nest("/auth", auth::router())
        // Public catalog reads.
        .nest("/courses", courses::router())
        // Eligibility computation.
        .nest("/eligibility", eligibility::router())
        // Authenticated completed-course list.
        .nest("/completions", completions::router())
        // Authenticated profile.
        .nest("/profile", profile::router())
        // Onboarding status + completion.
        .nest("/onboarding", onboarding::router())
        // Admin catalog management.
        .nest("/admin/courses", courses::admin_router())
        // Identity-directory webhook ingestion.
        .nest("/webhooks", webhooks::router())
}
