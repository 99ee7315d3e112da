//! Async traits describing the storage operations the interaction engine
//! depends on. Implementations live in the sibling `memory` and `postgres`
//! modules.

mod bookmarks;
mod contributions;
mod profile;
mod votes;

pub use bookmarks::BookmarksRepository;
pub use contributions::ContributionsRepository;
pub use profile::ProfileStatsRepository;
pub use votes::VotesRepository;
