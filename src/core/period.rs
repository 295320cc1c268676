//! Calendar bucketing shared by the report aggregator and request validation.
//!
//! Daily buckets are `YYYY-MM-DD`, weekly buckets are ISO-8601 weeks rendered
//! as `YYYY-Wnn` (Monday first, ISO week-numbering year), monthly buckets are
//! `YYYY-MM`. Dates that cannot be read fall into sentinel buckets instead of
//! failing the report.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Bucket used by the daily report when a row carries no readable date
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Bucket used by the weekly/monthly reports when the period is NULL or out of range
pub const UNKNOWN_PERIOD: &str = "Unknown Period";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Grouping granularity of the periodic (pre-aggregated) reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
}

impl Period {
    /// Render the bucket key for a (year, number) pair, where number is the
    /// ISO week (1-53) or the calendar month (1-12).
    pub fn key(self, year: Option<i64>, number: Option<i64>) -> String {
        let (Some(year), Some(number)) = (year, number) else {
            return UNKNOWN_PERIOD.to_string();
        };

        let in_range = match self {
            Period::Week => (1..=53).contains(&number),
            Period::Month => (1..=12).contains(&number),
        };
        if !in_range || !(0..=9999).contains(&year) {
            return UNKNOWN_PERIOD.to_string();
        }

        match self {
            Period::Week => format!("{year:04}-W{number:02}"),
            Period::Month => format!("{year:04}-{number:02}"),
        }
    }

    /// Bucket key of the period containing `date`
    pub fn key_for(self, date: NaiveDate) -> String {
        match self {
            Period::Week => {
                let week = date.iso_week();
                self.key(Some(i64::from(week.year())), Some(i64::from(week.week())))
            }
            Period::Month => self.key(Some(i64::from(date.year())), Some(i64::from(date.month()))),
        }
    }
}

/// Read the calendar day at the start of a date or timestamp string.
///
/// Accepts `2024-01-15`, `2024-01-15 08:30:00` and `2024-01-15T08:30:00.000Z`;
/// the time part, if any, is truncated.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

/// Daily bucket key. Absent or unreadable dates map to [`UNKNOWN_DATE`].
pub fn day_key(raw: Option<&str>) -> String {
    raw.and_then(parse_calendar_date)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}
