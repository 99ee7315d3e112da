use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use interactions_shared::types::{
    TargetCounters, TargetRef, UserId, VoteKind, VoteRecord, VoteViewState,
};

use crate::errors::VotesRepositoryError;
use crate::interfaces::VotesRepository;

#[derive(Default)]
struct VoteTables {
    records: HashMap<(TargetRef, UserId), VoteRecord>,
    counters: HashMap<TargetRef, TargetCounters>,
}

/// In-memory vote store.
///
/// The mutex spans both tables, so a cast adjusts the record and its
/// counters atomically; concurrent casts against the same target serialize
/// on the lock instead of racing on a uniqueness constraint.
#[derive(Default)]
pub struct MemoryVotesRepository {
    tables: Mutex<VoteTables>,
}

impl MemoryVotesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VotesRepository for MemoryVotesRepository {
    async fn cast_vote(
        &self,
        user_id: UserId,
        target: TargetRef,
        action: VoteKind,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let key = (target, user_id);

        match tables.records.get(&key).map(|record| record.kind) {
            None => {
                tables.records.insert(
                    key,
                    VoteRecord {
                        target,
                        user_id,
                        kind: action,
                        created_at: Utc::now(),
                    },
                );
                tables.counters.entry(target).or_default().increment(action);
            }
            Some(saved) if saved == action => {
                tables.records.remove(&key);
                tables.counters.entry(target).or_default().decrement(action);
            }
            Some(_) => {
                if let Some(record) = tables.records.get_mut(&key) {
                    record.kind = action;
                    record.created_at = Utc::now();
                }
                let counters = tables.counters.entry(target).or_default();
                counters.decrement(action.opposite());
                counters.increment(action);
            }
        }

        let counters = tables.counters.get(&target).copied().unwrap_or_default();
        let own_vote = tables.records.get(&key).map(|record| record.kind);
        Ok(VoteViewState::from_parts(counters, own_vote))
    }

    async fn view_state(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        let tables = self.tables.lock().unwrap();
        let counters = tables.counters.get(&target).copied().unwrap_or_default();
        let own_vote = tables
            .records
            .get(&(target, user_id))
            .map(|record| record.kind);
        Ok(VoteViewState::from_parts(counters, own_vote))
    }

    async fn view_states(
        &self,
        user_id: UserId,
        targets: &[TargetRef],
    ) -> Result<HashMap<TargetRef, VoteViewState>, VotesRepositoryError> {
        let tables = self.tables.lock().unwrap();
        let mut states = HashMap::with_capacity(targets.len());
        for target in targets {
            let counters = tables.counters.get(target).copied().unwrap_or_default();
            let own_vote = tables
                .records
                .get(&(*target, user_id))
                .map(|record| record.kind);
            states.insert(*target, VoteViewState::from_parts(counters, own_vote));
        }
        Ok(states)
    }

    async fn recount(&self, target: TargetRef) -> Result<TargetCounters, VotesRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let mut fresh = TargetCounters::default();
        for ((record_target, _), record) in tables.records.iter() {
            if *record_target == target {
                fresh.increment(record.kind);
            }
        }
        tables.counters.insert(target, fresh);
        Ok(fresh)
    }
}
