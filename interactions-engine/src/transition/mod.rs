//! Pure vote-state transitions.
//!
//! Everything here is deterministic and free of I/O: given the state a user
//! currently sees and the action they pressed, compute the counter deltas
//! and the flags the client should display. The optimistic controller uses
//! this to mutate its cache synchronously; the store resolves the same three
//! rules independently against its own records.

use interactions_shared::types::{VoteKind, VoteViewState};

use crate::errors::TransitionError;

/// Represents the outcome of resolving one vote action: counter deltas plus
/// the flags the client should display afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteTransition {
    pub upvote_delta: i64,
    pub downvote_delta: i64,
    pub has_upvoted: bool,
    pub has_downvoted: bool,
}

/// Computes the next vote state for one action.
///
/// Three rules cover every reachable input:
/// - repeating the active vote toggles it off (`-1` on that counter),
/// - the opposite of the active vote switches it (`-1` old, `+1` new),
/// - no active vote sets one (`+1` on that counter).
///
/// # Arguments
///
/// * `current` - The view state the action is resolved against.
/// * `action` - The kind of vote the user pressed.
///
/// # Returns
///
/// * `Ok(VoteTransition)` - The deltas and resulting flags.
/// * `Err(TransitionError)` - If `current` carries both flags.
pub fn next_state(
    current: &VoteViewState,
    action: VoteKind,
) -> Result<VoteTransition, TransitionError> {
    match (current.has_upvoted, current.has_downvoted, action) {
        (true, true, _) => Err(TransitionError::ConflictingFlags),
        // toggle off
        (true, false, VoteKind::Upvote) => Ok(VoteTransition {
            upvote_delta: -1,
            downvote_delta: 0,
            has_upvoted: false,
            has_downvoted: false,
        }),
        (false, true, VoteKind::Downvote) => Ok(VoteTransition {
            upvote_delta: 0,
            downvote_delta: -1,
            has_upvoted: false,
            has_downvoted: false,
        }),
        // switch
        (false, true, VoteKind::Upvote) => Ok(VoteTransition {
            upvote_delta: 1,
            downvote_delta: -1,
            has_upvoted: true,
            has_downvoted: false,
        }),
        (true, false, VoteKind::Downvote) => Ok(VoteTransition {
            upvote_delta: -1,
            downvote_delta: 1,
            has_upvoted: false,
            has_downvoted: true,
        }),
        // set
        (false, false, VoteKind::Upvote) => Ok(VoteTransition {
            upvote_delta: 1,
            downvote_delta: 0,
            has_upvoted: true,
            has_downvoted: false,
        }),
        (false, false, VoteKind::Downvote) => Ok(VoteTransition {
            upvote_delta: 0,
            downvote_delta: 1,
            has_upvoted: false,
            has_downvoted: true,
        }),
    }
}

/// Applies a transition to a view state.
///
/// Counters clamp at zero so a stale cache entry cannot push a tally
/// negative before reconciliation corrects it.
pub fn apply(current: &VoteViewState, transition: &VoteTransition) -> VoteViewState {
    VoteViewState {
        upvotes: (current.upvotes + transition.upvote_delta).max(0),
        downvotes: (current.downvotes + transition.downvote_delta).max(0),
        has_upvoted: transition.has_upvoted,
        has_downvoted: transition.has_downvoted,
    }
}
