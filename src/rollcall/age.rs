//! Age calculation.
//!
//! The current date is always a parameter: nothing here reads the clock, so the
//! same birth date yields the same age for the whole render pass.

use crate::error::{RollcallError, Result};
use chrono::{DateTime, Datelike, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a birth date as delivered by the backend: a plain `YYYY-MM-DD`, or an
/// RFC 3339 timestamp whose calendar date is taken as is.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| RollcallError::InvalidDate(raw.to_string()))
}

/// Whole years between `birth` and `today`. The birthday counts as reached on
/// the day itself; Feb 29 is compared as an ordinary month/day pair.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn calculate_age(raw_birth_date: &str, today: NaiveDate) -> Result<i32> {
    parse_birth_date(raw_birth_date).map(|birth| age_on(birth, today))
}
