//! Calendar heat-map aggregation.
//!
//! Derived entirely on read: ledger timestamps are bucketed by UTC calendar
//! day and each day is quantized against the busiest day of the year.
//! Nothing here is persisted, so the heat-map cannot drift from the ledger.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use interactions_repository::ContributionsRepository;
use interactions_shared::types::{ActivityCalendar, ActivityDay, UserId};
use tracing::warn;

/// Builds the dense full-year calendar for a set of timestamps.
///
/// Every day of the year appears exactly once, in order, zero-count days
/// included. Timestamps outside the year are ignored rather than rejected,
/// so callers can pass an unfiltered ledger slice.
pub fn build_calendar(year: i32, timestamps: &[DateTime<Utc>]) -> ActivityCalendar {
    let mut buckets: HashMap<NaiveDate, u32> = HashMap::new();
    for timestamp in timestamps {
        if timestamp.year() == year {
            *buckets.entry(timestamp.date_naive()).or_insert(0) += 1;
        }
    }

    let max_count = buckets.values().copied().max().unwrap_or(0);

    let Some(first_day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        // Years outside chrono's range have no calendar to build.
        return ActivityCalendar {
            year,
            days: Vec::new(),
            total_count: 0,
        };
    };

    let mut days = Vec::with_capacity(366);
    let mut total_count = 0;
    for date in first_day.iter_days().take_while(|day| day.year() == year) {
        let count = buckets.get(&date).copied().unwrap_or(0);
        total_count += count;
        days.push(ActivityDay {
            date,
            count,
            level: quantize(count, max_count),
        });
    }

    ActivityCalendar {
        year,
        days,
        total_count,
    }
}

/// Maps a day's count to an intensity level in `0..=4` relative to the
/// year's maximum.
///
/// The quartile boundaries are inclusive: a count at exactly a quarter of
/// the maximum is level 1, at half level 2, at three quarters level 3. A
/// zero maximum means a year without activity, where every day is level 0.
fn quantize(count: u32, max_count: u32) -> u8 {
    let count_x4 = u64::from(count) * 4;
    let max = u64::from(max_count);

    if count == 0 || max_count == 0 {
        0
    } else if count_x4 <= max {
        1
    } else if count_x4 <= max * 2 {
        2
    } else if count_x4 <= max * 3 {
        3
    } else {
        4
    }
}

/// Reads a user's ledger and derives the year's heat-map.
///
/// A failed ledger read degrades to an empty calendar instead of failing
/// the whole profile page.
pub struct HeatmapService {
    contributions: Arc<dyn ContributionsRepository>,
}

impl HeatmapService {
    pub fn new(contributions: Arc<dyn ContributionsRepository>) -> Self {
        Self { contributions }
    }

    pub async fn heatmap(&self, user_id: UserId, year: i32) -> ActivityCalendar {
        match self.contributions.entries_for_year(user_id, year).await {
            Ok(entries) => {
                let timestamps: Vec<DateTime<Utc>> =
                    entries.iter().map(|entry| entry.created_at).collect();
                build_calendar(year, &timestamps)
            }
            Err(err) => {
                warn!(
                    user_id = %user_id,
                    year,
                    error = %err,
                    "contribution read failed, returning an empty heat-map"
                );
                build_calendar(year, &[])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_quantization_boundaries() {
        // counts [0, 1, 2, 3, 4] with a maximum of 4 land on every level.
        let levels: Vec<u8> = [0, 1, 2, 3, 4]
            .into_iter()
            .map(|count| quantize(count, 4))
            .collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_quantization_with_zero_max() {
        assert_eq!(quantize(0, 0), 0);
    }

    #[test]
    fn test_calendar_is_dense_and_ordered() {
        let calendar = build_calendar(2025, &[at(2025, 3, 1), at(2025, 3, 1), at(2025, 7, 9)]);

        assert_eq!(calendar.days.len(), 365);
        assert_eq!(calendar.total_count, 3);
        for pair in calendar.days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }

        let march_first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let busiest = calendar
            .days
            .iter()
            .find(|day| day.date == march_first)
            .unwrap();
        assert_eq!(busiest.count, 2);
        assert_eq!(busiest.level, 4);
    }

    #[test]
    fn test_leap_year_has_366_days() {
        let calendar = build_calendar(2024, &[]);
        assert_eq!(calendar.days.len(), 366);
        assert_eq!(calendar.total_count, 0);
        assert!(calendar.days.iter().all(|day| day.level == 0));
    }

    #[test]
    fn test_timestamps_outside_year_are_ignored() {
        let calendar = build_calendar(2025, &[at(2024, 12, 31), at(2026, 1, 1)]);
        assert_eq!(calendar.total_count, 0);
    }
}
