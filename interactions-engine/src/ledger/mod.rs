//! Contribution ledger facade.
//!
//! Content-creation flows call [`ContributionLedger::record`] once per
//! successful creation. The underlying store is idempotent on
//! `(kind, reference_id)`, so replays and backfills cannot double-count.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use interactions_repository::ContributionsRepository;
use interactions_shared::types::{ContributionEntry, ContributionKind, UserId};
use tracing::debug;
use uuid::Uuid;

use crate::errors::LedgerError;

/// Appends contribution events on behalf of the creation flows.
pub struct ContributionLedger {
    store: Arc<dyn ContributionsRepository>,
}

impl ContributionLedger {
    pub fn new(store: Arc<dyn ContributionsRepository>) -> Self {
        Self { store }
    }

    /// Records one contribution.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The contributing user.
    /// * `kind` - What was created.
    /// * `reference_id` - Id of the created question, answer or tag.
    /// * `at` - When the creation happened.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A new entry was appended.
    /// * `Ok(false)` - The creation was already on the ledger.
    /// * `Err(LedgerError)` - If the write fails.
    pub async fn record(
        &self,
        user_id: UserId,
        kind: ContributionKind,
        reference_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<bool, LedgerError> {
        let entry = ContributionEntry {
            user_id,
            kind,
            reference_id,
            created_at: at,
        };

        let appended = self.store.record(&entry).await?;
        if !appended {
            debug!(reference_id = %reference_id, "contribution already on the ledger, skipping");
        }
        Ok(appended)
    }
}
