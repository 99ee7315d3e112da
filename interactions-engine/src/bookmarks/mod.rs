//! Optimistic bookmark controller.
//!
//! Same three-phase flow as the vote controller, over a binary state with
//! no counters: the speculative write flips the cached flag and the
//! reconciled value is whatever boolean the store returns.

use std::sync::Arc;

use interactions_repository::BookmarksRepository;
use tracing::{debug, error};
use uuid::Uuid;

use crate::session::{IdentityProvider, Notifier, PendingSet, SessionCache};

/// Shown when an unauthenticated user tries to save a question.
pub const SIGN_IN_TO_SAVE: &str = "You must be signed in to save a question";
/// Shown when a bookmark toggle fails to persist and is rolled back.
pub const SAVE_FAILED: &str = "Your bookmark could not be saved. Please try again";

/// Drives the optimistic bookmark flow for one session.
pub struct BookmarkController {
    store: Arc<dyn BookmarksRepository>,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    cache: SessionCache<Uuid, bool>,
    pending: PendingSet<Uuid>,
}

impl BookmarkController {
    pub fn new(
        store: Arc<dyn BookmarksRepository>,
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

    /// Seeds the cache with the server-rendered saved flag for a question.
    pub fn seed(&self, question_id: Uuid, saved: bool) {
        self.cache.store(question_id, saved);
    }

    /// The cached saved flag for a question, if any.
    pub fn view(&self, question_id: Uuid) -> Option<bool> {
        self.cache.get(&question_id)
    }

    /// Whether a toggle for this question is still awaiting its answer.
    pub fn has_pending(&self, question_id: Uuid) -> bool {
        self.pending.is_pending(&question_id)
    }

    /// Toggles the saved flag for a question.
    ///
    /// Unseeded questions are treated as unsaved, so the first optimistic
    /// flip marks them saved. Returns `true` when the toggle was applied
    /// and reconciled, `false` when it was rejected or rolled back.
    pub async fn toggle(&self, question_id: Uuid) -> bool {
        let Some(user_id) = self.identity.current_user() else {
            self.notifier.report_failure(SIGN_IN_TO_SAVE);
            return false;
        };

        if !self.pending.try_begin(question_id) {
            debug!(question_id = %question_id, "toggle dropped, a mutation is already in flight");
            return false;
        }

        let current = self.cache.get(&question_id).unwrap_or(false);
        let snapshot = self.cache.store(question_id, !current);

        match self.store.toggle(user_id, question_id).await {
            Ok(saved) => {
                self.cache.store(question_id, saved);
                self.pending.finish(question_id);
                true
            }
            Err(err) => {
                error!(
                    question_id = %question_id,
                    error = %err,
                    "bookmark toggle failed, rolling back"
                );
                self.cache.restore(question_id, snapshot);
                self.pending.finish(question_id);
                self.notifier.report_failure(SAVE_FAILED);
                false
            }
        }
    }
}
