use serde::{Deserialize, Serialize};

use crate::types::VoteKind;

/// Represents the denormalized vote tallies carried on a target.
///
/// Both fields always equal the number of stored vote records of that kind
/// for the target; they are only ever mutated in the same transaction as the
/// vote record they account for, and never go negative.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetCounters {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl TargetCounters {
    /// Adds one vote of the given kind.
    pub fn increment(&mut self, kind: VoteKind) {
        match kind {
            VoteKind::Upvote => self.upvotes += 1,
            VoteKind::Downvote => self.downvotes += 1,
        }
    }

    /// Removes one vote of the given kind, clamping at zero.
    pub fn decrement(&mut self, kind: VoteKind) {
        match kind {
            VoteKind::Upvote => self.upvotes = (self.upvotes - 1).max(0),
            VoteKind::Downvote => self.downvotes = (self.downvotes - 1).max(0),
        }
    }
}
