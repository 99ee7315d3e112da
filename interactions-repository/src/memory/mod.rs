//! In-memory implementations of the repository interfaces.
//!
//! Each store keeps its tables behind a single [`std::sync::Mutex`], so every
//! operation observes and writes a consistent snapshot, matching the
//! transaction boundaries of the PostgreSQL backend. Intended for tests and
//! local runs; nothing here survives a restart.

mod bookmarks;
mod contributions;
mod profile;
mod votes;

pub use bookmarks::MemoryBookmarksRepository;
pub use contributions::MemoryContributionsRepository;
pub use profile::MemoryProfileStatsRepository;
pub use votes::MemoryVotesRepository;
