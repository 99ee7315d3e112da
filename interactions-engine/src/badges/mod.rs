//! Badge tier evaluation.
//!
//! Five categories are scored independently against their own cutoffs and
//! the resulting tiers are tallied. Badges are recomputed from live
//! counters on every read and never persisted.

use std::sync::Arc;

use interactions_repository::ProfileStatsRepository;
use interactions_shared::types::{BadgeCategory, BadgeSummary, BadgeTier, ProfileCounters, UserId};
use tracing::warn;

/// Counts a category must reach for each tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierCutoffs {
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
}

/// Per-category cutoffs for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeThresholds {
    pub question_count: TierCutoffs,
    pub answer_count: TierCutoffs,
    pub question_upvotes: TierCutoffs,
    pub answer_upvotes: TierCutoffs,
    pub total_views: TierCutoffs,
}

impl BadgeThresholds {
    fn cutoffs(&self, category: BadgeCategory) -> TierCutoffs {
        match category {
            BadgeCategory::QuestionCount => self.question_count,
            BadgeCategory::AnswerCount => self.answer_count,
            BadgeCategory::QuestionUpvotes => self.question_upvotes,
            BadgeCategory::AnswerUpvotes => self.answer_upvotes,
            BadgeCategory::TotalViews => self.total_views,
        }
    }
}

impl Default for BadgeThresholds {
    fn default() -> Self {
        let content = TierCutoffs {
            bronze: 10,
            silver: 50,
            gold: 100,
        };

        Self {
            question_count: content,
            answer_count: content,
            question_upvotes: content,
            answer_upvotes: content,
            // Views accumulate much faster than authored content.
            total_views: TierCutoffs {
                bronze: 1_000,
                silver: 10_000,
                gold: 100_000,
            },
        }
    }
}

/// The highest tier whose cutoff the count meets, gold checked first.
///
/// A count below the bronze cutoff earns no tier for the category.
pub fn tier_for(count: i64, cutoffs: &TierCutoffs) -> Option<BadgeTier> {
    if count >= cutoffs.gold {
        Some(BadgeTier::Gold)
    } else if count >= cutoffs.silver {
        Some(BadgeTier::Silver)
    } else if count >= cutoffs.bronze {
        Some(BadgeTier::Bronze)
    } else {
        None
    }
}

/// Scores every category independently and tallies the tiers.
///
/// Categories are never combined or averaged; each contributes at most one
/// tier to the summary.
pub fn summarize(counters: &ProfileCounters, thresholds: &BadgeThresholds) -> BadgeSummary {
    let mut summary = BadgeSummary::default();
    for category in BadgeCategory::ALL {
        let cutoffs = thresholds.cutoffs(category);
        summary.record(tier_for(category.counter(counters), &cutoffs));
    }
    summary
}

/// Reads a user's live counters and evaluates their badges.
///
/// A failed counter read degrades to a zero summary instead of failing the
/// whole profile page.
pub struct BadgeService {
    profile_stats: Arc<dyn ProfileStatsRepository>,
    thresholds: BadgeThresholds,
}

impl BadgeService {
    pub fn new(profile_stats: Arc<dyn ProfileStatsRepository>) -> Self {
        Self::with_thresholds(profile_stats, BadgeThresholds::default())
    }

    pub fn with_thresholds(
        profile_stats: Arc<dyn ProfileStatsRepository>,
        thresholds: BadgeThresholds,
    ) -> Self {
        Self {
            profile_stats,
            thresholds,
        }
    }

    pub async fn badges(&self, user_id: UserId) -> BadgeSummary {
        match self.profile_stats.counters(user_id).await {
            Ok(counters) => summarize(&counters, &self.thresholds),
            Err(err) => {
                warn!(
                    user_id = %user_id,
                    error = %err,
                    "profile counter read failed, returning an empty badge summary"
                );
                BadgeSummary::default()
            }
        }
    }
}
