use thiserror::Error;

/// Represents all possible errors that can occur when accessing vote storage.
#[derive(Debug, Error)]
pub enum VotesRepositoryError {
    /// The underlying database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The storage backend was unreachable.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A stored vote kind column held a value outside the known encoding.
    #[error("Invalid vote kind: {0}")]
    InvalidVoteKind(i16),

    /// A stored target kind column held a value outside the known encoding.
    #[error("Invalid target kind: {0}")]
    InvalidTargetKind(i16),
}

impl VotesRepositoryError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }
}
