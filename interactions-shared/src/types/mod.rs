mod activity;
mod badge;
mod bookmark;
mod contribution;
mod counters;
mod view_state;
mod vote;

pub use activity::{ActivityCalendar, ActivityDay};
pub use badge::{BadgeCategory, BadgeSummary, BadgeTier, ProfileCounters};
pub use bookmark::BookmarkRecord;
pub use contribution::{ContributionEntry, ContributionKind};
pub use counters::TargetCounters;
pub use view_state::VoteViewState;
pub use vote::{TargetKind, TargetRef, VoteKind, VoteRecord};

use uuid::Uuid;

/// Identifier of a platform user.
pub type UserId = Uuid;
