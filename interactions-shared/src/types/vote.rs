use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

/// Represents the kind of content a vote can be cast on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A question post.
    Question,
    /// An answer post.
    Answer,
}

/// Represents the direction of a vote.
///
/// Used both for the stored vote type and for the action a user requests;
/// removing a vote is not a third variant because it is expressed as
/// repeating the active direction (toggle off).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VoteKind {
    /// A positive endorsement.
    Upvote,
    /// A negative endorsement.
    Downvote,
}

impl VoteKind {
    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            VoteKind::Upvote => VoteKind::Downvote,
            VoteKind::Downvote => VoteKind::Upvote,
        }
    }
}

/// Identifies one votable piece of content.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: Uuid,
}

impl TargetRef {
    pub fn question(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Question,
            id,
        }
    }

    pub fn answer(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Answer,
            id,
        }
    }
}

/// Represents a user's vote on a target.
///
/// At most one record exists per (target kind, target id, user id); the
/// store enforces this with a uniqueness constraint on that triple, not on
/// the vote kind, so changing direction updates the record in place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub target: TargetRef,
    pub user_id: UserId,
    pub kind: VoteKind,
    pub created_at: DateTime<Utc>,
}
