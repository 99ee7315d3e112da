use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use interactions_repository::{
    BookmarksRepository, ContributionsRepository, MemoryBookmarksRepository,
    MemoryContributionsRepository, MemoryProfileStatsRepository, MemoryVotesRepository,
    ProfileStatsRepository, StorageSource, VotesRepository,
};
use interactions_shared::types::{
    ContributionEntry, ContributionKind, ProfileCounters, TargetRef, UserId, VoteKind,
};
use uuid::Uuid;

fn user() -> UserId {
    Uuid::new_v4()
}

fn question() -> TargetRef {
    TargetRef::question(Uuid::new_v4())
}

fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
}

// ==== votes ====

#[tokio::test]
async fn test_cast_vote_sets_first_vote() {
    let store = MemoryVotesRepository::new();
    let target = question();
    let voter = user();

    let state = store
        .cast_vote(voter, target, VoteKind::Upvote)
        .await
        .unwrap();

    assert_eq!(state.upvotes, 1);
    assert_eq!(state.downvotes, 0);
    assert!(state.has_upvoted);
    assert!(!state.has_downvoted);
}

#[tokio::test]
async fn test_cast_vote_same_kind_toggles_off() {
    let store = MemoryVotesRepository::new();
    let target = question();
    let voter = user();

    store
        .cast_vote(voter, target, VoteKind::Upvote)
        .await
        .unwrap();
    let state = store
        .cast_vote(voter, target, VoteKind::Upvote)
        .await
        .unwrap();

    assert_eq!(state.upvotes, 0);
    assert_eq!(state.downvotes, 0);
    assert!(!state.has_upvoted);
    assert!(!state.has_downvoted);
}

#[tokio::test]
async fn test_cast_vote_opposite_kind_switches() {
    let store = MemoryVotesRepository::new();
    let target = question();
    let voter = user();

    store
        .cast_vote(voter, target, VoteKind::Upvote)
        .await
        .unwrap();
    let state = store
        .cast_vote(voter, target, VoteKind::Downvote)
        .await
        .unwrap();

    assert_eq!(state.upvotes, 0);
    assert_eq!(state.downvotes, 1);
    assert!(!state.has_upvoted);
    assert!(state.has_downvoted);
}

#[tokio::test]
async fn test_cast_vote_isolates_users() {
    let store = MemoryVotesRepository::new();
    let target = question();
    let first = user();
    let second = user();

    store
        .cast_vote(first, target, VoteKind::Upvote)
        .await
        .unwrap();
    let seen_by_second = store
        .cast_vote(second, target, VoteKind::Downvote)
        .await
        .unwrap();

    assert_eq!(seen_by_second.upvotes, 1);
    assert_eq!(seen_by_second.downvotes, 1);
    assert!(!seen_by_second.has_upvoted);
    assert!(seen_by_second.has_downvoted);

    let seen_by_first = store.view_state(first, target).await.unwrap();
    assert!(seen_by_first.has_upvoted);
    assert!(!seen_by_first.has_downvoted);
}

#[tokio::test]
async fn test_cast_vote_isolates_target_kinds() {
    // A question and an answer sharing the same id are different targets.
    let store = MemoryVotesRepository::new();
    let id = Uuid::new_v4();
    let voter = user();

    store
        .cast_vote(voter, TargetRef::question(id), VoteKind::Upvote)
        .await
        .unwrap();

    let answer_state = store
        .view_state(voter, TargetRef::answer(id))
        .await
        .unwrap();
    assert_eq!(answer_state.upvotes, 0);
    assert!(!answer_state.has_upvoted);
}

#[tokio::test]
async fn test_view_state_defaults_to_zero() {
    let store = MemoryVotesRepository::new();

    let state = store.view_state(user(), question()).await.unwrap();

    assert_eq!(state.upvotes, 0);
    assert_eq!(state.downvotes, 0);
    assert!(!state.has_upvoted);
    assert!(!state.has_downvoted);
}

#[tokio::test]
async fn test_view_states_covers_all_requested() {
    let store = MemoryVotesRepository::new();
    let voter = user();
    let voted = question();
    let untouched = question();

    store
        .cast_vote(voter, voted, VoteKind::Downvote)
        .await
        .unwrap();

    let states = store
        .view_states(voter, &[voted, untouched])
        .await
        .unwrap();

    assert_eq!(states.len(), 2);
    assert!(states[&voted].has_downvoted);
    assert_eq!(states[&voted].downvotes, 1);
    assert_eq!(states[&untouched].upvotes, 0);
    assert!(!states[&untouched].has_upvoted);
}

#[tokio::test]
async fn test_recount_matches_running_counters() {
    let store = MemoryVotesRepository::new();
    let target = question();

    for _ in 0..3 {
        store
            .cast_vote(user(), target, VoteKind::Upvote)
            .await
            .unwrap();
    }
    store
        .cast_vote(user(), target, VoteKind::Downvote)
        .await
        .unwrap();

    let recounted = store.recount(target).await.unwrap();
    assert_eq!(recounted.upvotes, 3);
    assert_eq!(recounted.downvotes, 1);

    let state = store.view_state(user(), target).await.unwrap();
    assert_eq!(state.upvotes, 3);
    assert_eq!(state.downvotes, 1);
}

#[tokio::test]
async fn test_vote_sequences_preserve_invariants() {
    // Every action sequence up to length six, checked against a simple
    // model after each cast. Two other users hold one vote each so the
    // tallies start above zero.
    for len in 1..=6u32 {
        for bits in 0..(1u32 << len) {
            let store = MemoryVotesRepository::new();
            let target = question();
            let voter = user();

            store
                .cast_vote(user(), target, VoteKind::Upvote)
                .await
                .unwrap();
            store
                .cast_vote(user(), target, VoteKind::Downvote)
                .await
                .unwrap();

            let mut own: Option<VoteKind> = None;
            for step in 0..len {
                let action = if (bits >> step) & 1 == 0 {
                    VoteKind::Upvote
                } else {
                    VoteKind::Downvote
                };

                own = match own {
                    Some(saved) if saved == action => None,
                    _ => Some(action),
                };

                let state = store.cast_vote(voter, target, action).await.unwrap();

                assert!(!state.has_conflicting_flags());
                assert_eq!(state.active_vote(), own);
                assert_eq!(
                    state.upvotes,
                    1 + i64::from(own == Some(VoteKind::Upvote)),
                );
                assert_eq!(
                    state.downvotes,
                    1 + i64::from(own == Some(VoteKind::Downvote)),
                );
            }
        }
    }
}

#[tokio::test]
async fn test_concurrent_casts_stay_consistent() {
    let store = Arc::new(MemoryVotesRepository::new());
    let target = question();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.cast_vote(user(), target, VoteKind::Upvote).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let recounted = store.recount(target).await.unwrap();
    assert_eq!(recounted.upvotes, 16);
    assert_eq!(recounted.downvotes, 0);
}

// ==== bookmarks ====

#[tokio::test]
async fn test_bookmark_toggle_round_trip() {
    let store = MemoryBookmarksRepository::new();
    let reader = user();
    let question_id = Uuid::new_v4();

    assert!(store.toggle(reader, question_id).await.unwrap());
    assert!(store.is_saved(reader, question_id).await.unwrap());

    assert!(!store.toggle(reader, question_id).await.unwrap());
    assert!(!store.is_saved(reader, question_id).await.unwrap());
}

#[tokio::test]
async fn test_saved_flags_cover_all_requested() {
    let store = MemoryBookmarksRepository::new();
    let reader = user();
    let saved = Uuid::new_v4();
    let unsaved = Uuid::new_v4();

    store.toggle(reader, saved).await.unwrap();

    let flags = store.saved_flags(reader, &[saved, unsaved]).await.unwrap();
    assert_eq!(flags.len(), 2);
    assert!(flags[&saved]);
    assert!(!flags[&unsaved]);
}

#[tokio::test]
async fn test_bookmark_isolates_users() {
    let store = MemoryBookmarksRepository::new();
    let question_id = Uuid::new_v4();
    let saver = user();
    let other = user();

    store.toggle(saver, question_id).await.unwrap();

    assert!(store.is_saved(saver, question_id).await.unwrap());
    assert!(!store.is_saved(other, question_id).await.unwrap());
}

// ==== contributions ====

#[tokio::test]
async fn test_contribution_record_is_idempotent() {
    let store = MemoryContributionsRepository::new();
    let author = user();
    let entry = ContributionEntry {
        user_id: author,
        kind: ContributionKind::Question,
        reference_id: Uuid::new_v4(),
        created_at: march(1),
    };

    assert!(store.record(&entry).await.unwrap());
    assert!(!store.record(&entry).await.unwrap());

    let entries = store.entries_for_year(author, 2025).await.unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_contribution_year_filter_and_order() {
    let store = MemoryContributionsRepository::new();
    let author = user();

    // Recorded out of timestamp order, with one entry outside the year.
    for (kind, at) in [
        (ContributionKind::Answer, march(20)),
        (ContributionKind::Question, march(5)),
        (
            ContributionKind::Tag,
            Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap(),
        ),
    ] {
        let entry = ContributionEntry {
            user_id: author,
            kind,
            reference_id: Uuid::new_v4(),
            created_at: at,
        };
        store.record(&entry).await.unwrap();
    }

    let entries = store.entries_for_year(author, 2025).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].created_at, march(5));
    assert_eq!(entries[1].created_at, march(20));
}

#[tokio::test]
async fn test_contribution_same_reference_different_kind() {
    // Uniqueness is on the (kind, reference) pair, not the reference alone.
    let store = MemoryContributionsRepository::new();
    let author = user();
    let reference_id = Uuid::new_v4();

    let question = ContributionEntry {
        user_id: author,
        kind: ContributionKind::Question,
        reference_id,
        created_at: march(1),
    };
    let tag = ContributionEntry {
        user_id: author,
        kind: ContributionKind::Tag,
        reference_id,
        created_at: march(1),
    };

    assert!(store.record(&question).await.unwrap());
    assert!(store.record(&tag).await.unwrap());
}

// ==== profile counters ====

#[tokio::test]
async fn test_profile_counters_default_to_zero() {
    let store = MemoryProfileStatsRepository::new();

    let counters = store.counters(user()).await.unwrap();
    assert_eq!(counters, ProfileCounters::default());
}

#[tokio::test]
async fn test_profile_counters_read_back() {
    let store = MemoryProfileStatsRepository::new();
    let profiled = user();
    let counters = ProfileCounters {
        question_count: 12,
        answer_count: 34,
        question_upvotes: 56,
        answer_upvotes: 78,
        total_views: 90,
    };

    store.set_counters(profiled, counters);

    assert_eq!(store.counters(profiled).await.unwrap(), counters);
}

// ==== source ====

#[tokio::test]
async fn test_memory_source_builds_working_stores() {
    let stores = StorageSource::memory().into_stores().await.unwrap();
    let voter = user();
    let target = question();

    let state = stores
        .votes
        .cast_vote(voter, target, VoteKind::Upvote)
        .await
        .unwrap();
    assert!(state.has_upvoted);

    assert!(stores.bookmarks.toggle(voter, target.id).await.unwrap());
}
