use async_trait::async_trait;
use interactions_shared::types::{ContributionEntry, UserId};

use crate::errors::ContributionsRepositoryError;

/// Defines the interface for the append-only contribution ledger.
///
/// The ledger is idempotent on `(kind, reference_id)`: recording the same
/// contribution twice leaves a single entry.
#[async_trait]
pub trait ContributionsRepository: Send + Sync {
    /// Appends one contribution entry if it has not been recorded before.
    ///
    /// # Arguments
    ///
    /// * `entry` - The contribution to record.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The entry was appended.
    /// * `Ok(false)` - An entry with the same kind and reference already existed.
    /// * `Err(ContributionsRepositoryError)` - If the write fails.
    async fn record(
        &self,
        entry: &ContributionEntry,
    ) -> Result<bool, ContributionsRepositoryError>;

    /// Reads a user's contributions for one calendar year, ordered by time.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose ledger is read.
    /// * `year` - The calendar year, in UTC.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ContributionEntry>)` - The entries in ascending timestamp order.
    /// * `Err(ContributionsRepositoryError)` - If the read fails or the year is
    ///   outside the representable range.
    async fn entries_for_year(
        &self,
        user_id: UserId,
        year: i32,
    ) -> Result<Vec<ContributionEntry>, ContributionsRepositoryError>;
}
