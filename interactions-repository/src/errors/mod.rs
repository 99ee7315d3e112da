//! Error types returned by the repository interfaces.

mod bookmarks;
mod contributions;
mod profile;
mod source;
mod votes;

pub use bookmarks::BookmarksRepositoryError;
pub use contributions::ContributionsRepositoryError;
pub use profile::ProfileStatsRepositoryError;
pub use source::StoreSetupError;
pub use votes::VotesRepositoryError;
