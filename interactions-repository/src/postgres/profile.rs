use async_trait::async_trait;
use interactions_shared::types::{ProfileCounters, UserId};

use crate::errors::ProfileStatsRepositoryError;
use crate::interfaces::ProfileStatsRepository;

/// PostgreSQL profile counter store.
pub struct PostgresProfileStatsRepository {
    pool: sqlx::PgPool,
}

impl PostgresProfileStatsRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStatsRepository for PostgresProfileStatsRepository {
    async fn counters(
        &self,
        user_id: UserId,
    ) -> Result<ProfileCounters, ProfileStatsRepositoryError> {
        let row: Option<(i64, i64, i64, i64, i64)> = sqlx::query_as(
            "SELECT question_count, answer_count, question_upvotes, answer_upvotes, total_views \
             FROM profile_counters \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(
                |(question_count, answer_count, question_upvotes, answer_upvotes, total_views)| {
                    ProfileCounters {
                        question_count,
                        answer_count,
                        question_upvotes,
                        answer_upvotes,
                        total_views,
                    }
                },
            )
            .unwrap_or_default())
    }
}
