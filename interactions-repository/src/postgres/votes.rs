use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use interactions_shared::types::{
    TargetCounters, TargetKind, TargetRef, UserId, VoteKind, VoteViewState,
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::VotesRepositoryError;
use crate::interfaces::VotesRepository;
use crate::postgres::{target_kind_code, vote_kind_code};

/// PostgreSQL vote store.
///
/// Casting a vote runs in one transaction: the saved vote row is read with
/// `FOR UPDATE`, resolved against the requested action, and the counters are
/// adjusted through an upsert in the same transaction. Two writers inserting
/// the first vote for the same `(target, user)` can still collide on the
/// primary key; the loser retries once and resolves against the row the
/// winner committed.
pub struct PostgresVotesRepository {
    pool: sqlx::PgPool,
}

impl PostgresVotesRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Runs one cast attempt in its own transaction.
    async fn cast_vote_once(
        &self,
        user_id: UserId,
        target: TargetRef,
        action: VoteKind,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        let kind_code = target_kind_code(target.kind);
        let mut tx = self.pool.begin().await?;

        let saved: Option<i16> = sqlx::query_scalar(
            "SELECT vote_kind FROM votes \
             WHERE target_kind = $1 AND target_id = $2 AND user_id = $3 \
             FOR UPDATE",
        )
        .bind(kind_code)
        .bind(target.id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let saved = match saved {
            None => None,
            Some(0) => Some(VoteKind::Upvote),
            Some(1) => Some(VoteKind::Downvote),
            Some(code) => return Err(VotesRepositoryError::InvalidVoteKind(code)),
        };

        let (up_delta, down_delta, own_vote): (i64, i64, Option<VoteKind>) = match saved {
            None => {
                sqlx::query(
                    "INSERT INTO votes (target_kind, target_id, user_id, vote_kind, created_at) \
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(kind_code)
                .bind(target.id)
                .bind(user_id)
                .bind(vote_kind_code(action))
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;

                match action {
                    VoteKind::Upvote => (1, 0, Some(action)),
                    VoteKind::Downvote => (0, 1, Some(action)),
                }
            }
            Some(saved_kind) if saved_kind == action => {
                sqlx::query(
                    "DELETE FROM votes \
                     WHERE target_kind = $1 AND target_id = $2 AND user_id = $3",
                )
                .bind(kind_code)
                .bind(target.id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;

                match action {
                    VoteKind::Upvote => (-1, 0, None),
                    VoteKind::Downvote => (0, -1, None),
                }
            }
            Some(_) => {
                sqlx::query(
                    "UPDATE votes SET vote_kind = $4, created_at = $5 \
                     WHERE target_kind = $1 AND target_id = $2 AND user_id = $3",
                )
                .bind(kind_code)
                .bind(target.id)
                .bind(user_id)
                .bind(vote_kind_code(action))
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;

                match action {
                    VoteKind::Upvote => (1, -1, Some(action)),
                    VoteKind::Downvote => (-1, 1, Some(action)),
                }
            }
        };

        let counters = self
            .adjust_counters_tx(target, up_delta, down_delta, &mut tx)
            .await?;
        tx.commit().await?;

        Ok(VoteViewState::from_parts(counters, own_vote))
    }

    /// Applies counter deltas within an active transaction.
    ///
    /// Upserts the counter row and returns the post-adjustment tallies. The
    /// `GREATEST` guards keep the columns from going negative if a recount
    /// and a cast ever interleave.
    async fn adjust_counters_tx(
        &self,
        target: TargetRef,
        up_delta: i64,
        down_delta: i64,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<TargetCounters, VotesRepositoryError> {
        let (upvotes, downvotes): (i64, i64) = sqlx::query_as(
            "INSERT INTO vote_counters (target_kind, target_id, upvotes, downvotes) \
             VALUES ($1, $2, GREATEST($3, 0), GREATEST($4, 0)) \
             ON CONFLICT (target_kind, target_id) \
             DO UPDATE SET \
                 upvotes = GREATEST(vote_counters.upvotes + $3, 0), \
                 downvotes = GREATEST(vote_counters.downvotes + $4, 0) \
             RETURNING upvotes, downvotes",
        )
        .bind(target_kind_code(target.kind))
        .bind(target.id)
        .bind(up_delta)
        .bind(down_delta)
        .fetch_one(&mut **tx)
        .await?;

        Ok(TargetCounters { upvotes, downvotes })
    }

    async fn read_counters(
        &self,
        target: TargetRef,
    ) -> Result<TargetCounters, VotesRepositoryError> {
        let row: Option<(i64, i64)> = sqlx::query_as(
            "SELECT upvotes, downvotes FROM vote_counters \
             WHERE target_kind = $1 AND target_id = $2",
        )
        .bind(target_kind_code(target.kind))
        .bind(target.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(|(upvotes, downvotes)| TargetCounters { upvotes, downvotes })
            .unwrap_or_default())
    }
}

#[async_trait]
impl VotesRepository for PostgresVotesRepository {
    async fn cast_vote(
        &self,
        user_id: UserId,
        target: TargetRef,
        action: VoteKind,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        let mut retried = false;
        loop {
            match self.cast_vote_once(user_id, target, action).await {
                Err(VotesRepositoryError::Database(err))
                    if !retried
                        && err
                            .as_database_error()
                            .is_some_and(|db| db.is_unique_violation()) =>
                {
                    debug!(
                        target_id = %target.id,
                        user_id = %user_id,
                        "vote insert lost a race, retrying against the committed row"
                    );
                    retried = true;
                }
                outcome => return outcome,
            }
        }
    }

    async fn view_state(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        let counters = self.read_counters(target).await?;

        let own: Option<i16> = sqlx::query_scalar(
            "SELECT vote_kind FROM votes \
             WHERE target_kind = $1 AND target_id = $2 AND user_id = $3",
        )
        .bind(target_kind_code(target.kind))
        .bind(target.id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let own_vote = match own {
            None => None,
            Some(0) => Some(VoteKind::Upvote),
            Some(1) => Some(VoteKind::Downvote),
            Some(code) => return Err(VotesRepositoryError::InvalidVoteKind(code)),
        };

        Ok(VoteViewState::from_parts(counters, own_vote))
    }

    async fn view_states(
        &self,
        user_id: UserId,
        targets: &[TargetRef],
    ) -> Result<HashMap<TargetRef, VoteViewState>, VotesRepositoryError> {
        if targets.is_empty() {
            return Ok(HashMap::new());
        }

        let kinds: Vec<i16> = targets.iter().map(|t| target_kind_code(t.kind)).collect();
        let ids: Vec<Uuid> = targets.iter().map(|t| t.id).collect();

        let counter_rows: Vec<(i16, Uuid, i64, i64)> = sqlx::query_as(
            "SELECT target_kind, target_id, upvotes, downvotes \
             FROM vote_counters \
             WHERE (target_kind, target_id) IN (SELECT * FROM UNNEST($1::smallint[], $2::uuid[]))",
        )
        .bind(&kinds)
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let vote_rows: Vec<(i16, Uuid, i16)> = sqlx::query_as(
            "SELECT target_kind, target_id, vote_kind \
             FROM votes \
             WHERE user_id = $3 \
               AND (target_kind, target_id) IN (SELECT * FROM UNNEST($1::smallint[], $2::uuid[]))",
        )
        .bind(&kinds)
        .bind(&ids)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut counters: HashMap<TargetRef, TargetCounters> = HashMap::new();
        for (kind, id, upvotes, downvotes) in counter_rows {
            let target = TargetRef {
                kind: decode_target_kind(kind)?,
                id,
            };
            counters.insert(target, TargetCounters { upvotes, downvotes });
        }

        let mut own_votes: HashMap<TargetRef, VoteKind> = HashMap::new();
        for (kind, id, vote_kind) in vote_rows {
            let target = TargetRef {
                kind: decode_target_kind(kind)?,
                id,
            };
            let own = match vote_kind {
                0 => VoteKind::Upvote,
                1 => VoteKind::Downvote,
                code => return Err(VotesRepositoryError::InvalidVoteKind(code)),
            };
            own_votes.insert(target, own);
        }

        Ok(targets
            .iter()
            .map(|target| {
                let state = VoteViewState::from_parts(
                    counters.get(target).copied().unwrap_or_default(),
                    own_votes.get(target).copied(),
                );
                (*target, state)
            })
            .collect())
    }

    async fn recount(&self, target: TargetRef) -> Result<TargetCounters, VotesRepositoryError> {
        let kind_code = target_kind_code(target.kind);
        let mut tx = self.pool.begin().await?;

        let (upvotes, downvotes): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE vote_kind = 0), \
                    COUNT(*) FILTER (WHERE vote_kind = 1) \
             FROM votes \
             WHERE target_kind = $1 AND target_id = $2",
        )
        .bind(kind_code)
        .bind(target.id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO vote_counters (target_kind, target_id, upvotes, downvotes) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (target_kind, target_id) \
             DO UPDATE SET \
                 upvotes = EXCLUDED.upvotes, \
                 downvotes = EXCLUDED.downvotes",
        )
        .bind(kind_code)
        .bind(target.id)
        .bind(upvotes)
        .bind(downvotes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(TargetCounters { upvotes, downvotes })
    }
}

fn decode_target_kind(code: i16) -> Result<TargetKind, VotesRepositoryError> {
    match code {
        0 => Ok(TargetKind::Question),
        1 => Ok(TargetKind::Answer),
        code => Err(VotesRepositoryError::InvalidTargetKind(code)),
    }
}
