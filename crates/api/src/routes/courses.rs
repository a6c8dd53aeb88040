//! Route definitions for the course catalog.
//!
//! Two routers are provided:
//! - `router()` for public catalog reads mounted at `/courses`
//! - `admin_router()` for catalog management mounted at `/admin/courses`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Public catalog routes mounted at `/courses`.
///
/// ```text
/// GET /             -> list_courses
/// GET /categories   -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses))
        .route("/categories", get(courses::list_categories))
}

/// Admin catalog routes mounted at `/admin/courses`.
///
/// ```text
/// POST   /       -> create_course (admin only)
/// PUT    /{id}   -> update_course (admin only)
/// DELETE /{id}   -> delete_course (admin only)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(courses::create_course))
        .route(
            "/{id}",
            put(courses::update_course).delete(courses::delete_course),
        )
}
