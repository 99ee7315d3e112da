//! Storage layer for the interaction engine.
//!
//! The crate exposes storage behind async traits so callers never depend on a
//! concrete backend. Two implementations ship with it: an in-memory backend
//! used in tests and local runs, and a PostgreSQL backend for production.
//! [`StorageSource`] selects between them at wiring time.

pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;
pub mod source;

pub use errors::{
    BookmarksRepositoryError, ContributionsRepositoryError, ProfileStatsRepositoryError,
    StoreSetupError, VotesRepositoryError,
};
pub use interfaces::{
    BookmarksRepository, ContributionsRepository, ProfileStatsRepository, VotesRepository,
};
pub use memory::{
    MemoryBookmarksRepository, MemoryContributionsRepository, MemoryProfileStatsRepository,
    MemoryVotesRepository,
};
pub use postgres::{
    PgStoreConfig, PgStores, PostgresBookmarksRepository, PostgresContributionsRepository,
    PostgresProfileStatsRepository, PostgresVotesRepository,
};
pub use source::{StorageSource, Stores};
