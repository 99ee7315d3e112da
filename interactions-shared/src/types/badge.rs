use serde::{Deserialize, Serialize};

/// Represents the five independent counters a badge evaluation reads.
///
/// These are live, denormalized counts maintained by the surrounding
/// application (question/answer creation, voting, view tracking); badges are
/// recomputed from them on every read and never persisted, so they cannot go
/// stale independently of their inputs.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileCounters {
    pub question_count: i64,
    pub answer_count: i64,
    pub question_upvotes: i64,
    pub answer_upvotes: i64,
    pub total_views: i64,
}

/// Represents one badge category.
///
/// Categories are evaluated independently and never combined or averaged.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BadgeCategory {
    QuestionCount,
    AnswerCount,
    QuestionUpvotes,
    AnswerUpvotes,
    TotalViews,
}

impl BadgeCategory {
    /// All categories, in evaluation order.
    pub const ALL: [BadgeCategory; 5] = [
        BadgeCategory::QuestionCount,
        BadgeCategory::AnswerCount,
        BadgeCategory::QuestionUpvotes,
        BadgeCategory::AnswerUpvotes,
        BadgeCategory::TotalViews,
    ];

    /// The counter this category is scored on.
    pub fn counter(&self, counters: &ProfileCounters) -> i64 {
        match self {
            BadgeCategory::QuestionCount => counters.question_count,
            BadgeCategory::AnswerCount => counters.answer_count,
            BadgeCategory::QuestionUpvotes => counters.question_upvotes,
            BadgeCategory::AnswerUpvotes => counters.answer_upvotes,
            BadgeCategory::TotalViews => counters.total_views,
        }
    }
}

/// Represents the tier a category can land in.
///
/// A count below the bronze threshold yields no tier at all, so "no badge"
/// is `Option::None` rather than a fourth variant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
}

/// Represents how many categories landed in each tier for one user.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeSummary {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl BadgeSummary {
    /// Tallies one category's tier into the summary.
    pub fn record(&mut self, tier: Option<BadgeTier>) {
        match tier {
            Some(BadgeTier::Gold) => self.gold += 1,
            Some(BadgeTier::Silver) => self.silver += 1,
            Some(BadgeTier::Bronze) => self.bronze += 1,
            None => {}
        }
    }
}
