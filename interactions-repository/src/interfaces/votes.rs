use std::collections::HashMap;

use async_trait::async_trait;
use interactions_shared::types::{TargetCounters, TargetRef, UserId, VoteKind, VoteViewState};

use crate::errors::VotesRepositoryError;

/// Defines the interface for storing votes and their denormalized counters.
///
/// A target carries at most one vote per user. Casting resolves against the
/// saved vote inside a single transaction, so the returned view state is the
/// authoritative outcome of the write, not a read that may race with it.
#[async_trait]
pub trait VotesRepository: Send + Sync {
    /// Applies one vote action for a user against a target.
    ///
    /// Resolution depends on the saved vote for `(target, user_id)`:
    /// no saved vote inserts a new one, a saved vote of the same kind
    /// removes it, and a saved vote of the opposite kind is switched in
    /// place. The denormalized counters are adjusted in the same
    /// transaction.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user casting the vote.
    /// * `target` - The question or answer being voted on.
    /// * `action` - The kind of vote the user pressed.
    ///
    /// # Returns
    ///
    /// * `Ok(VoteViewState)` - The authoritative state after the write.
    /// * `Err(VotesRepositoryError)` - If the transaction fails.
    async fn cast_vote(
        &self,
        user_id: UserId,
        target: TargetRef,
        action: VoteKind,
    ) -> Result<VoteViewState, VotesRepositoryError>;

    /// Reads the current view state of a target for one user.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose own-vote flags are resolved.
    /// * `target` - The question or answer being read.
    ///
    /// # Returns
    ///
    /// * `Ok(VoteViewState)` - Counters plus the user's own-vote flags.
    /// * `Err(VotesRepositoryError)` - If the read fails.
    async fn view_state(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<VoteViewState, VotesRepositoryError>;

    /// Reads the view states of many targets in one round trip.
    ///
    /// Targets with no recorded votes resolve to the zero state rather than
    /// being omitted, so callers can hydrate a page without checking for
    /// missing keys.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose own-vote flags are resolved.
    /// * `targets` - The questions and answers being read.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<TargetRef, VoteViewState>)` - One entry per requested target.
    /// * `Err(VotesRepositoryError)` - If the read fails.
    async fn view_states(
        &self,
        user_id: UserId,
        targets: &[TargetRef],
    ) -> Result<HashMap<TargetRef, VoteViewState>, VotesRepositoryError>;

    /// Recomputes a target's counters from its vote records and overwrites
    /// the denormalized row.
    ///
    /// # Arguments
    ///
    /// * `target` - The question or answer to recount.
    ///
    /// # Returns
    ///
    /// * `Ok(TargetCounters)` - The recomputed counters.
    /// * `Err(VotesRepositoryError)` - If the recount fails.
    async fn recount(&self, target: TargetRef) -> Result<TargetCounters, VotesRepositoryError>;
}
