//! Repository for the `completed_courses` table.
//!
//! The stored list is replaced wholesale inside a transaction on every
//! save; the API layer computes the union with the previously stored set
//! first, so a save never drops history. Reads return codes in saved
//! order via the `position` column.

use coursepath_core::types::DbId;
use sqlx::PgPool;

/// Provides access to a user's completed-course codes.
pub struct CompletionRepo;

impl CompletionRepo {
    /// Fetch a user's completed-course codes in saved order.
    pub async fn list_codes(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT course_code FROM completed_courses
             WHERE user_id = $1
             ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(code,)| code).collect())
    }

    /// Replace a user's stored list with `codes`, transactionally.
    ///
    /// Callers must pass the already-merged list (existing ∪ selected);
    /// this method itself is a plain full replace.
    pub async fn replace(
        pool: &PgPool,
        user_id: DbId,
        codes: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM completed_courses WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for (position, code) in codes.iter().enumerate() {
            sqlx::query(
                "INSERT INTO completed_courses (user_id, course_code, position)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (user_id, course_code) DO NOTHING",
            )
            .bind(user_id)
            .bind(code)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}
