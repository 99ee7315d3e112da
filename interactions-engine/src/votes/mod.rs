//! Optimistic vote controller.
//!
//! One user action runs through three phases: snapshot the cached view
//! state, apply the transition speculatively so the caller observes it
//! synchronously, then await the store's authoritative answer. Success
//! overwrites the cache with that answer even when the guess matched;
//! failure restores the snapshot and notifies the user once.

use std::sync::Arc;

use interactions_repository::VotesRepository;
use interactions_shared::types::{TargetRef, VoteKind, VoteViewState};
use tracing::{debug, error};

use crate::session::{IdentityProvider, Notifier, PendingSet, SessionCache};
use crate::transition;

/// Shown when an unauthenticated user tries to vote.
pub const SIGN_IN_TO_VOTE: &str = "You must be signed in to vote";
/// Shown when a vote fails to persist and is rolled back.
pub const VOTE_FAILED: &str = "Your vote could not be saved. Please try again";

/// Drives the optimistic vote flow for one session.
///
/// The cache and in-flight set live on the controller, so rollback state is
/// scoped to the session rather than hidden in globals. The store is the
/// single authority; the cache only ever holds its last answer or a
/// speculative guess awaiting one.
pub struct VoteController {
    store: Arc<dyn VotesRepository>,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    cache: SessionCache<TargetRef, VoteViewState>,
    pending: PendingSet<TargetRef>,
}

impl VoteController {
    pub fn new(
        store: Arc<dyn VotesRepository>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            identity,
            notifier,
            cache: SessionCache::new(),
            pending: PendingSet::new(),
        }
    }

    /// Seeds the cache with server-rendered initial state for a target.
    ///
    /// Targets never seeded fall back to the zero state on their first
    /// action.
    pub fn seed(&self, target: TargetRef, state: VoteViewState) {
        self.cache.store(target, state);
    }

    /// The cached view state for a target, if any.
    pub fn view(&self, target: TargetRef) -> Option<VoteViewState> {
        self.cache.get(&target)
    }

    /// Whether a mutation for this target is still awaiting its answer.
    pub fn has_pending(&self, target: TargetRef) -> bool {
        self.pending.is_pending(&target)
    }

    /// Casts one vote action against a target.
    ///
    /// The speculative cache write happens before this method first
    /// suspends; the only await is the store mutation itself. While that
    /// mutation is in flight further actions on the same target are dropped,
    /// actions on other targets proceed independently.
    ///
    /// # Arguments
    ///
    /// * `target` - The question or answer being voted on.
    /// * `action` - The kind of vote the user pressed.
    ///
    /// # Returns
    ///
    /// `true` when the action was applied and reconciled, `false` when it
    /// was rejected or rolled back. Failures additionally surface exactly
    /// one notification; a drop due to an in-flight mutation is silent.
    pub async fn vote(&self, target: TargetRef, action: VoteKind) -> bool {
        let Some(user_id) = self.identity.current_user() else {
            self.notifier.report_failure(SIGN_IN_TO_VOTE);
            return false;
        };

        if !self.pending.try_begin(target) {
            debug!(target_id = %target.id, "vote dropped, a mutation is already in flight");
            return false;
        }

        let current = self.cache.get(&target).unwrap_or_default();
        let transition = match transition::next_state(&current, action) {
            Ok(transition) => transition,
            Err(err) => {
                self.pending.finish(target);
                error!(
                    target_id = %target.id,
                    error = %err,
                    "refusing to vote on corrupt cached state"
                );
                self.notifier.report_failure(VOTE_FAILED);
                return false;
            }
        };

        let snapshot = self
            .cache
            .store(target, transition::apply(&current, &transition));

        match self.store.cast_vote(user_id, target, action).await {
            Ok(authoritative) => {
                self.cache.store(target, authoritative);
                self.pending.finish(target);
                true
            }
            Err(err) => {
                error!(target_id = %target.id, error = %err, "vote mutation failed, rolling back");
                self.cache.restore(target, snapshot);
                self.pending.finish(target);
                self.notifier.report_failure(VOTE_FAILED);
                false
            }
        }
    }
}
