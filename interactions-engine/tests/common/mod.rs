#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use interactions_engine::Notifier;
use interactions_repository::{
    BookmarksRepository, BookmarksRepositoryError, ContributionsRepository,
    ContributionsRepositoryError, MemoryBookmarksRepository, MemoryVotesRepository,
    ProfileStatsRepository, ProfileStatsRepositoryError, VotesRepository, VotesRepositoryError,
};
use interactions_shared::types::{
    ContributionEntry, ProfileCounters, TargetCounters, TargetRef, UserId, VoteKind, VoteViewState,
};
use tokio::sync::Semaphore;
use uuid::Uuid;

/// Notifier that records every message it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn report_failure(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Vote store whose writes always fail, for rollback paths.
pub struct FailingVotesRepository;

#[async_trait]
impl VotesRepository for FailingVotesRepository {
    async fn cast_vote(
        &self,
        _user_id: UserId,
        _target: TargetRef,
        _action: VoteKind,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        Err(VotesRepositoryError::connection("vote store is down"))
    }

    async fn view_state(
        &self,
        _user_id: UserId,
        _target: TargetRef,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        Err(VotesRepositoryError::connection("vote store is down"))
    }

    async fn view_states(
        &self,
        _user_id: UserId,
        _targets: &[TargetRef],
    ) -> Result<HashMap<TargetRef, VoteViewState>, VotesRepositoryError> {
        Err(VotesRepositoryError::connection("vote store is down"))
    }

    async fn recount(&self, _target: TargetRef) -> Result<TargetCounters, VotesRepositoryError> {
        Err(VotesRepositoryError::connection("vote store is down"))
    }
}

/// Vote store that parks every cast until the test releases it, for
/// exercising the in-flight gate.
pub struct GatedVotesRepository {
    inner: MemoryVotesRepository,
    gate: Semaphore,
}

impl GatedVotesRepository {
    pub fn new() -> Self {
        Self {
            inner: MemoryVotesRepository::new(),
            gate: Semaphore::new(0),
        }
    }

    /// Lets `count` parked casts proceed.
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }
}

#[async_trait]
impl VotesRepository for GatedVotesRepository {
    async fn cast_vote(
        &self,
        user_id: UserId,
        target: TargetRef,
        action: VoteKind,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        self.gate.acquire().await.expect("gate closed").forget();
        self.inner.cast_vote(user_id, target, action).await
    }

    async fn view_state(
        &self,
        user_id: UserId,
        target: TargetRef,
    ) -> Result<VoteViewState, VotesRepositoryError> {
        self.inner.view_state(user_id, target).await
    }

    async fn view_states(
        &self,
        user_id: UserId,
        targets: &[TargetRef],
    ) -> Result<HashMap<TargetRef, VoteViewState>, VotesRepositoryError> {
        self.inner.view_states(user_id, targets).await
    }

    async fn recount(&self, target: TargetRef) -> Result<TargetCounters, VotesRepositoryError> {
        self.inner.recount(target).await
    }
}

/// Bookmark store whose writes always fail.
pub struct FailingBookmarksRepository;

#[async_trait]
impl BookmarksRepository for FailingBookmarksRepository {
    async fn toggle(
        &self,
        _user_id: UserId,
        _question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        Err(BookmarksRepositoryError::connection("bookmark store is down"))
    }

    async fn is_saved(
        &self,
        _user_id: UserId,
        _question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        Err(BookmarksRepositoryError::connection("bookmark store is down"))
    }

    async fn saved_flags(
        &self,
        _user_id: UserId,
        _question_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, bool>, BookmarksRepositoryError> {
        Err(BookmarksRepositoryError::connection("bookmark store is down"))
    }
}

/// Bookmark store that parks every toggle until the test releases it.
pub struct GatedBookmarksRepository {
    inner: MemoryBookmarksRepository,
    gate: Semaphore,
}

impl GatedBookmarksRepository {
    pub fn new() -> Self {
        Self {
            inner: MemoryBookmarksRepository::new(),
            gate: Semaphore::new(0),
        }
    }

    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }
}

#[async_trait]
impl BookmarksRepository for GatedBookmarksRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        self.gate.acquire().await.expect("gate closed").forget();
        self.inner.toggle(user_id, question_id).await
    }

    async fn is_saved(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        self.inner.is_saved(user_id, question_id).await
    }

    async fn saved_flags(
        &self,
        user_id: UserId,
        question_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, bool>, BookmarksRepositoryError> {
        self.inner.saved_flags(user_id, question_ids).await
    }
}

/// Ledger whose reads and writes always fail, for degrade paths.
pub struct FailingContributionsRepository;

#[async_trait]
impl ContributionsRepository for FailingContributionsRepository {
    async fn record(
        &self,
        _entry: &ContributionEntry,
    ) -> Result<bool, ContributionsRepositoryError> {
        Err(ContributionsRepositoryError::connection("ledger is down"))
    }

    async fn entries_for_year(
        &self,
        _user_id: UserId,
        _year: i32,
    ) -> Result<Vec<ContributionEntry>, ContributionsRepositoryError> {
        Err(ContributionsRepositoryError::connection("ledger is down"))
    }
}

/// Profile counter store whose reads always fail.
pub struct FailingProfileStatsRepository;

#[async_trait]
impl ProfileStatsRepository for FailingProfileStatsRepository {
    async fn counters(
        &self,
        _user_id: UserId,
    ) -> Result<ProfileCounters, ProfileStatsRepositoryError> {
        Err(ProfileStatsRepositoryError::connection("profile store is down"))
    }
}
