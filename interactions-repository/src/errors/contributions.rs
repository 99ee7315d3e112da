use thiserror::Error;

/// Represents all possible errors that can occur when accessing the
/// contribution ledger.
#[derive(Debug, Error)]
pub enum ContributionsRepositoryError {
    /// The underlying database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The storage backend was unreachable.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A stored contribution kind column held a value outside the known
    /// encoding.
    #[error("Invalid contribution kind: {0}")]
    InvalidContributionKind(i16),

    /// The requested year cannot be represented as a calendar date range.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),
}

impl ContributionsRepositoryError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }
}
