use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

/// Represents the kind of content-creation activity a ledger entry records.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContributionKind {
    /// A question was created.
    Question,
    /// An answer was created.
    Answer,
    /// A tag was used for the first time.
    Tag,
}

/// Represents one append-only contribution ledger entry.
///
/// Entries are never updated or deleted once written. At most one entry
/// exists per (kind, reference id): recording the same creation twice is a
/// no-op, so replays and backfills cannot inflate activity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionEntry {
    pub user_id: UserId,
    pub kind: ContributionKind,
    pub reference_id: Uuid,
    pub created_at: DateTime<Utc>,
}
