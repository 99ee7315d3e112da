//! # Interactions Engine
//!
//! The client-facing half of the voting and bookmarking system, plus the
//! read-side aggregations it feeds.
//!
//! The controllers in [`votes`] and [`bookmarks`] follow one protocol:
//! snapshot the cached state, apply the change speculatively so the caller
//! sees it at once, then await the authoritative store and either reconcile
//! to its answer or roll the snapshot back and notify the user. The
//! [`ledger`] records content-creation events append-only, and [`heatmap`]
//! and [`badges`] derive calendar activity and tier counts from stored data
//! on every read.

pub mod badges;
pub mod bookmarks;
pub mod errors;
pub mod heatmap;
pub mod ledger;
pub mod session;
pub mod transition;
pub mod votes;

pub use badges::{BadgeService, BadgeThresholds, TierCutoffs, summarize, tier_for};
pub use bookmarks::BookmarkController;
pub use errors::{LedgerError, TransitionError};
pub use heatmap::{HeatmapService, build_calendar};
pub use ledger::ContributionLedger;
pub use session::{
    IdentityProvider, Notifier, PendingSet, SessionCache, StaticIdentity, TracingNotifier,
};
pub use transition::{VoteTransition, apply, next_state};
pub use votes::VoteController;
