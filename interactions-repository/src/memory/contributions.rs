use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Datelike;
use interactions_shared::types::{ContributionEntry, ContributionKind, UserId};
use uuid::Uuid;

use crate::errors::ContributionsRepositoryError;
use crate::interfaces::ContributionsRepository;

#[derive(Default)]
struct LedgerTable {
    entries: Vec<ContributionEntry>,
    seen: HashSet<(ContributionKind, Uuid)>,
}

/// In-memory contribution ledger.
#[derive(Default)]
pub struct MemoryContributionsRepository {
    table: Mutex<LedgerTable>,
}

impl MemoryContributionsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContributionsRepository for MemoryContributionsRepository {
    async fn record(
        &self,
        entry: &ContributionEntry,
    ) -> Result<bool, ContributionsRepositoryError> {
        let mut table = self.table.lock().unwrap();
        if !table.seen.insert((entry.kind, entry.reference_id)) {
            return Ok(false);
        }
        table.entries.push(entry.clone());
        Ok(true)
    }

    async fn entries_for_year(
        &self,
        user_id: UserId,
        year: i32,
    ) -> Result<Vec<ContributionEntry>, ContributionsRepositoryError> {
        let table = self.table.lock().unwrap();
        let mut entries: Vec<ContributionEntry> = table
            .entries
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.created_at.year() == year)
            .cloned()
            .collect();
        // Backfills can append out of timestamp order.
        entries.sort_by_key(|entry| entry.created_at);
        Ok(entries)
    }
}
