use std::sync::Arc;

use crate::errors::StoreSetupError;
use crate::interfaces::{
    BookmarksRepository, ContributionsRepository, ProfileStatsRepository, VotesRepository,
};
use crate::memory::{
    MemoryBookmarksRepository, MemoryContributionsRepository, MemoryProfileStatsRepository,
    MemoryVotesRepository,
};
use crate::postgres::PgStores;

/// Selects which backend the stores run on.
pub enum StorageSource {
    /// In-memory tables, for tests and local runs.
    Memory,
    /// PostgreSQL, for production use.
    Postgres {
        /// PostgreSQL connection URL
        database_url: String,
    },
}

impl StorageSource {
    pub fn memory() -> Self {
        StorageSource::Memory
    }

    pub fn postgres(database_url: impl Into<String>) -> Self {
        StorageSource::Postgres {
            database_url: database_url.into(),
        }
    }

    /// Builds one store per interface on the selected backend.
    ///
    /// The PostgreSQL path connects a pool and applies the embedded
    /// migrations before handing out stores; migrations already applied are
    /// skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(Stores)` - Ready-to-use stores sharing one backend.
    /// * `Err(StoreSetupError)` - If connecting or migrating fails.
    pub async fn into_stores(self) -> Result<Stores, StoreSetupError> {
        match self {
            StorageSource::Memory => Ok(Stores {
                votes: Arc::new(MemoryVotesRepository::new()),
                bookmarks: Arc::new(MemoryBookmarksRepository::new()),
                contributions: Arc::new(MemoryContributionsRepository::new()),
                profile_stats: Arc::new(MemoryProfileStatsRepository::new()),
            }),
            StorageSource::Postgres { database_url } => {
                let pg = PgStores::connect(&database_url).await?;
                pg.migrate().await?;
                Ok(Stores {
                    votes: Arc::new(pg.votes()),
                    bookmarks: Arc::new(pg.bookmarks()),
                    contributions: Arc::new(pg.contributions()),
                    profile_stats: Arc::new(pg.profile_stats()),
                })
            }
        }
    }
}

/// Bundles one store per interface behind shared trait objects.
#[derive(Clone)]
pub struct Stores {
    pub votes: Arc<dyn VotesRepository>,
    pub bookmarks: Arc<dyn BookmarksRepository>,
    pub contributions: Arc<dyn ContributionsRepository>,
    pub profile_stats: Arc<dyn ProfileStatsRepository>,
}
