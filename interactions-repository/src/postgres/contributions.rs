use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use interactions_shared::types::{ContributionEntry, ContributionKind, UserId};
use uuid::Uuid;

use crate::errors::ContributionsRepositoryError;
use crate::interfaces::ContributionsRepository;
use crate::postgres::contribution_kind_code;

/// PostgreSQL contribution ledger.
pub struct PostgresContributionsRepository {
    pool: sqlx::PgPool,
}

impl PostgresContributionsRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContributionsRepository for PostgresContributionsRepository {
    async fn record(
        &self,
        entry: &ContributionEntry,
    ) -> Result<bool, ContributionsRepositoryError> {
        let result = sqlx::query(
            "INSERT INTO contributions (kind, reference_id, user_id, created_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (kind, reference_id) DO NOTHING",
        )
        .bind(contribution_kind_code(entry.kind))
        .bind(entry.reference_id)
        .bind(entry.user_id)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn entries_for_year(
        &self,
        user_id: UserId,
        year: i32,
    ) -> Result<Vec<ContributionEntry>, ContributionsRepositoryError> {
        let start = year_start(year)?;
        let end = year_start(year + 1)?;

        let rows: Vec<(Uuid, i16, Uuid, DateTime<Utc>)> = sqlx::query_as(
            "SELECT user_id, kind, reference_id, created_at \
             FROM contributions \
             WHERE user_id = $1 AND created_at >= $2 AND created_at < $3 \
             ORDER BY created_at",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (user_id, kind, reference_id, created_at) in rows {
            let kind = match kind {
                0 => ContributionKind::Question,
                1 => ContributionKind::Answer,
                2 => ContributionKind::Tag,
                code => return Err(ContributionsRepositoryError::InvalidContributionKind(code)),
            };
            entries.push(ContributionEntry {
                user_id,
                kind,
                reference_id,
                created_at,
            });
        }

        Ok(entries)
    }
}

/// Midnight UTC on January 1st of the given year.
fn year_start(year: i32) -> Result<DateTime<Utc>, ContributionsRepositoryError> {
    let date = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(ContributionsRepositoryError::InvalidYear(year))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
