use thiserror::Error;

/// Represents all possible errors that can occur when computing a vote
/// transition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The input state claimed both an upvote and a downvote. That state is
    /// unreachable while the store's uniqueness constraint holds, so the
    /// transition is refused rather than guessed at.
    #[error("Vote state has both flags set; refusing to compute a transition")]
    ConflictingFlags,
}
