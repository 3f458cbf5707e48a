//! Calendar time handling for catalog dates.
//!
//! Catalog dates are free text with variable precision ("1957 Oct  4 1928",
//! "1962 Apr", "1970s", "1985?"). This module normalizes them into naive
//! calendar timestamps and provides the year arithmetic used for lifespans.

pub mod vague_date;

#[cfg(test)]
mod vague_date_tests;

use chrono::NaiveDateTime;

pub use vague_date::{parse_vague_date, DateNormalizer};

/// Calendar timestamp without time zone, as recorded by the catalog.
pub type Timestamp = NaiveDateTime;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Length of the year used for lifespan arithmetic, in days.
pub const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Elapsed time from `start` to `end` in years of `days_per_year` days.
///
/// Negative when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use satlife_rust::time::{years_between, JULIAN_YEAR_DAYS};
///
/// let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = start + chrono::Duration::days(1461);
/// assert!((years_between(start, end, JULIAN_YEAR_DAYS) - 4.0).abs() < 1e-12);
/// ```
pub fn years_between(start: Timestamp, end: Timestamp, days_per_year: f64) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    millis / 1000.0 / (days_per_year * SECONDS_PER_DAY)
}

/// Current local wall-clock time as a naive timestamp.
pub fn now() -> Timestamp {
    chrono::Local::now().naive_local()
}
