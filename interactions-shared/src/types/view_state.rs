use serde::{Deserialize, Serialize};

use crate::types::{TargetCounters, VoteKind};

/// Represents the client-visible vote state of one target for one user.
///
/// This is both the cached optimistic state on the client and the
/// authoritative snapshot the store returns after applying a mutation.
/// `has_upvoted` and `has_downvoted` are never simultaneously true; the
/// booleans mirror the store's one-record-per-(target, user) constraint.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteViewState {
    pub upvotes: i64,
    pub downvotes: i64,
    pub has_upvoted: bool,
    pub has_downvoted: bool,
}

impl VoteViewState {
    /// Builds a view state from a target's counters and the user's stored
    /// vote, if any.
    pub fn from_parts(counters: TargetCounters, own_vote: Option<VoteKind>) -> Self {
        Self {
            upvotes: counters.upvotes,
            downvotes: counters.downvotes,
            has_upvoted: own_vote == Some(VoteKind::Upvote),
            has_downvoted: own_vote == Some(VoteKind::Downvote),
        }
    }

    /// The user's active vote according to the flags, if any.
    pub fn active_vote(&self) -> Option<VoteKind> {
        match (self.has_upvoted, self.has_downvoted) {
            (true, false) => Some(VoteKind::Upvote),
            (false, true) => Some(VoteKind::Downvote),
            _ => None,
        }
    }

    /// True when both flags are set, a state the engine must reject.
    pub fn has_conflicting_flags(&self) -> bool {
        self.has_upvoted && self.has_downvoted
    }
}
