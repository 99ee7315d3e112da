//! PostgreSQL implementations of the repository interfaces.
//!
//! All stores share one connection pool and encode enum columns as
//! `SMALLINT` codes. Vote writes run inside a single transaction that
//! adjusts the record and its denormalized counters together, so readers
//! never observe one without the other.

mod bookmarks;
mod contributions;
mod profile;
mod votes;

pub use bookmarks::PostgresBookmarksRepository;
pub use contributions::PostgresContributionsRepository;
pub use profile::PostgresProfileStatsRepository;
pub use votes::PostgresVotesRepository;

use interactions_shared::types::{ContributionKind, TargetKind, VoteKind};
use sqlx::postgres::PgPoolOptions;

use crate::errors::StoreSetupError;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("src/postgres/migrations");

/// Configuration for the PostgreSQL connection pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PgStoreConfig {
    /// Maximum number of pooled connections. Defaults to 20.
    pub max_connections: u32,
}

impl Default for PgStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
        }
    }
}

impl PgStoreConfig {
    /// Create a config with a custom pool size cap.
    ///
    /// # Arguments
    ///
    /// * `max_connections` - Maximum number of pooled connections.
    ///
    /// # Returns
    ///
    /// A `PgStoreConfig` with the specified connection cap.
    pub fn with_max_connections(max_connections: u32) -> Self {
        Self { max_connections }
    }
}

/// Owns the connection pool and hands out the individual stores.
///
/// Each accessor clones the pool, so the stores can be wrapped in `Arc`s and
/// moved independently while sharing connections.
pub struct PgStores {
    pool: sqlx::PgPool,
}

impl PgStores {
    /// Connects a new pool to the given database with the default config.
    ///
    /// # Arguments
    ///
    /// * `database_url` - PostgreSQL connection URL.
    ///
    /// # Returns
    ///
    /// * `Ok(PgStores)` - Connected store factory.
    /// * `Err(StoreSetupError)` - If the connection fails.
    pub async fn connect(database_url: &str) -> Result<Self, StoreSetupError> {
        Self::connect_with(database_url, PgStoreConfig::default()).await
    }

    /// Connects a new pool sized by the given config.
    ///
    /// # Arguments
    ///
    /// * `database_url` - PostgreSQL connection URL.
    /// * `config` - Pool sizing.
    ///
    /// # Returns
    ///
    /// * `Ok(PgStores)` - Connected store factory.
    /// * `Err(StoreSetupError)` - If the connection fails.
    pub async fn connect_with(
        database_url: &str,
        config: PgStoreConfig,
    ) -> Result<Self, StoreSetupError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Wraps an already configured pool.
    pub fn with_pool(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreSetupError> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    pub fn votes(&self) -> PostgresVotesRepository {
        PostgresVotesRepository::new(self.pool.clone())
    }

    pub fn bookmarks(&self) -> PostgresBookmarksRepository {
        PostgresBookmarksRepository::new(self.pool.clone())
    }

    pub fn contributions(&self) -> PostgresContributionsRepository {
        PostgresContributionsRepository::new(self.pool.clone())
    }

    pub fn profile_stats(&self) -> PostgresProfileStatsRepository {
        PostgresProfileStatsRepository::new(self.pool.clone())
    }
}

pub(crate) fn target_kind_code(kind: TargetKind) -> i16 {
    match kind {
        TargetKind::Question => 0,
        TargetKind::Answer => 1,
    }
}

pub(crate) fn vote_kind_code(kind: VoteKind) -> i16 {
    match kind {
        VoteKind::Upvote => 0,
        VoteKind::Downvote => 1,
    }
}

pub(crate) fn contribution_kind_code(kind: ContributionKind) -> i16 {
    match kind {
        ContributionKind::Question => 0,
        ContributionKind::Answer => 1,
        ContributionKind::Tag => 2,
    }
}
