use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one calendar day in a user's activity heat-map.
///
/// Derived on read, never persisted. `level` is the quantized intensity of
/// `count` relative to the user's busiest day of the year, in `0..=4`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

/// Represents a user's full-year activity heat-map.
///
/// `days` is dense and ordered: exactly one entry per calendar day of the
/// year (365 or 366), including days with zero activity. `total_count` is
/// the sum of all day counts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityCalendar {
    pub year: i32,
    pub days: Vec<ActivityDay>,
    pub total_count: u32,
}
