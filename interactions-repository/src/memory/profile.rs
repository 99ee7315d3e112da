use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use interactions_shared::types::{ProfileCounters, UserId};

use crate::errors::ProfileStatsRepositoryError;
use crate::interfaces::ProfileStatsRepository;

/// In-memory profile counter store.
///
/// Reads dominate writes here, so the map sits behind an [`RwLock`] rather
/// than a mutex.
#[derive(Default)]
pub struct MemoryProfileStatsRepository {
    rows: RwLock<HashMap<UserId, ProfileCounters>>,
}

impl MemoryProfileStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the counters for a user, inserting the row if absent.
    pub fn set_counters(&self, user_id: UserId, counters: ProfileCounters) {
        self.rows.write().unwrap().insert(user_id, counters);
    }
}

#[async_trait]
impl ProfileStatsRepository for MemoryProfileStatsRepository {
    async fn counters(
        &self,
        user_id: UserId,
    ) -> Result<ProfileCounters, ProfileStatsRepositoryError> {
        let rows = self.rows.read().unwrap();
        Ok(rows.get(&user_id).copied().unwrap_or_default())
    }
}
