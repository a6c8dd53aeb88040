//! User entity model and DTOs.

use coursepath_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub name: Option<String>,
    pub college_year: Option<String>,
    pub major: Option<String>,
    pub avatar_url: Option<String>,
    pub onboarding_completed: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub name: Option<String>,
    pub college_year: Option<String>,
    pub major: Option<String>,
    pub avatar_url: Option<String>,
    pub onboarding_completed: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            name: user.name,
            college_year: user.college_year,
            major: user.major,
            avatar_url: user.avatar_url,
            onboarding_completed: user.onboarding_completed,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for updating a user's profile. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub college_year: Option<String>,
    pub major: Option<String>,
}

/// Profile fields pushed by the identity directory on
/// `user.created` / `user.updated` events. Upserted by email.
#[derive(Debug, Deserialize)]
pub struct DirectoryProfile {
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
