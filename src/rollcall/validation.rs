//! Student form validation.
//!
//! Checks run in form order and the first failure is reported, so the user
//! fixes one field at a time.

use crate::age::parse_birth_date;
use crate::error::{RollcallError, Result};
use crate::model::StudentDraft;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 80;
/// Students must be born at least this many calendar years before today.
pub const MIN_AGE_YEARS: i32 = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn validate_name(name: &str) -> Result<()> {
    let len = name.trim().chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(RollcallError::Validation(format!(
            "Name must be between {} and {} characters.",
            NAME_MIN_CHARS, NAME_MAX_CHARS
        )));
    }
    Ok(())
}

/// Only the birth year is compared, so a child turning five later this year
/// already qualifies.
pub fn validate_birth_date(raw: &str, today: NaiveDate) -> Result<()> {
    let invalid = || RollcallError::Validation("Birth date is invalid.".to_string());
    let birth = parse_birth_date(raw).map_err(|_| invalid())?;
    if birth.year() > today.year() - MIN_AGE_YEARS {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(RollcallError::Validation("Email is invalid.".to_string()));
    }
    Ok(())
}

pub fn validate_draft(draft: &StudentDraft, today: NaiveDate) -> Result<()> {
    validate_name(&draft.name)?;
    validate_birth_date(&draft.birth_date, today)?;
    validate_email(&draft.email)?;
    if draft.class_id.is_none() {
        return Err(RollcallError::Validation("Class is required.".to_string()));
    }
    Ok(())
}
