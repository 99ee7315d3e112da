use async_trait::async_trait;
use interactions_shared::types::{ProfileCounters, UserId};

use crate::errors::ProfileStatsRepositoryError;

/// Defines the interface for reading the per-user counters that feed badge
/// evaluation.
#[async_trait]
pub trait ProfileStatsRepository: Send + Sync {
    /// Reads the lifetime counters for one user.
    ///
    /// Users with no recorded activity resolve to all-zero counters.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose counters are read.
    ///
    /// # Returns
    ///
    /// * `Ok(ProfileCounters)` - The user's lifetime counters.
    /// * `Err(ProfileStatsRepositoryError)` - If the read fails.
    async fn counters(
        &self,
        user_id: UserId,
    ) -> Result<ProfileCounters, ProfileStatsRepositoryError>;
}
