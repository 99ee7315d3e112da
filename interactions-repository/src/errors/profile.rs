use thiserror::Error;

/// Represents all possible errors that can occur when reading profile
/// counters.
#[derive(Debug, Error)]
pub enum ProfileStatsRepositoryError {
    /// The underlying database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The storage backend was unreachable.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl ProfileStatsRepositoryError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }
}
