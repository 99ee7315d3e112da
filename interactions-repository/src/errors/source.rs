use thiserror::Error;

/// Represents all possible errors that can occur while connecting the
/// storage backend and preparing its schema.
#[derive(Debug, Error)]
pub enum StoreSetupError {
    /// Connecting to the database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Running the embedded migrations failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
