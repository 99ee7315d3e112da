use interactions_repository::ContributionsRepositoryError;
use thiserror::Error;

/// Represents all possible errors that can occur when recording a
/// contribution.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The underlying ledger storage operation failed.
    #[error("Contribution storage error: {0}")]
    Storage(#[from] ContributionsRepositoryError),
}
