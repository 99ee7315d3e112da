use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use interactions_shared::types::UserId;
use tracing::debug;
use uuid::Uuid;

use crate::errors::BookmarksRepositoryError;
use crate::interfaces::BookmarksRepository;

/// PostgreSQL bookmark store.
pub struct PostgresBookmarksRepository {
    pool: sqlx::PgPool,
}

impl PostgresBookmarksRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Runs one toggle attempt in its own transaction.
    async fn toggle_once(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM bookmarks WHERE user_id = $1 AND question_id = $2 FOR UPDATE",
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_optional(&mut *tx)
        .await?;

        let saved = if existing.is_some() {
            sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND question_id = $2")
                .bind(user_id)
                .bind(question_id)
                .execute(&mut *tx)
                .await?;
            false
        } else {
            sqlx::query(
                "INSERT INTO bookmarks (user_id, question_id, created_at) VALUES ($1, $2, $3)",
            )
            .bind(user_id)
            .bind(question_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
            true
        };

        tx.commit().await?;
        Ok(saved)
    }
}

#[async_trait]
impl BookmarksRepository for PostgresBookmarksRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        // Two first-time saves can race on the primary key; the loser
        // retries and lands on the delete branch, which is exactly what two
        // sequential toggles would have produced.
        let mut retried = false;
        loop {
            match self.toggle_once(user_id, question_id).await {
                Err(BookmarksRepositoryError::Database(err))
                    if !retried
                        && err
                            .as_database_error()
                            .is_some_and(|db| db.is_unique_violation()) =>
                {
                    debug!(
                        question_id = %question_id,
                        user_id = %user_id,
                        "bookmark insert lost a race, retrying against the committed row"
                    );
                    retried = true;
                }
                outcome => return outcome,
            }
        }
    }

    async fn is_saved(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        let saved: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE user_id = $1 AND question_id = $2)",
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn saved_flags(
        &self,
        user_id: UserId,
        question_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, bool>, BookmarksRepositoryError> {
        if question_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let saved: Vec<Uuid> = sqlx::query_scalar(
            "SELECT question_id FROM bookmarks \
             WHERE user_id = $1 AND question_id = ANY($2::uuid[])",
        )
        .bind(user_id)
        .bind(question_ids)
        .fetch_all(&self.pool)
        .await?;

        let saved: HashSet<Uuid> = saved.into_iter().collect();
        Ok(question_ids
            .iter()
            .map(|question_id| (*question_id, saved.contains(question_id)))
            .collect())
    }
}
