//! Completed-course membership rows.

use coursepath_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One completed-course membership from the `completed_courses` table.
///
/// `position` preserves the order the list was last saved in, so reads
/// reproduce the saved list exactly.
#[derive(Debug, Clone, FromRow)]
pub struct Completion {
    pub user_id: DbId,
    pub course_code: String,
    pub position: i32,
    pub completed_at: Timestamp,
}
