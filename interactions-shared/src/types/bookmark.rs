use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

/// Represents a user's saved question.
///
/// Presence of the record means the question is saved; there is no payload
/// beyond the creation timestamp and no counter to keep in sync.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub user_id: UserId,
    pub question_id: Uuid,
    pub created_at: DateTime<Utc>,
}
