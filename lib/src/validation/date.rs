// lib/src/validation/date.rs

//! Calendar-date validation for `DD/MM/YYYY` text.
//!
//! The range checks are deliberately loose: any day in `1..=31` is accepted
//! for any month, so `31/02/2020` passes. Dates after today are rejected.

use chrono::{Datelike, Local, NaiveDate};
use models::errors::{ValidationError, ValidationResult};

pub const DATE_LAYOUT: &str = "DD/MM/YYYY";

const DATE_LEN: usize = 10;
const SEPARATOR: u8 = b'/';
const MIN_YEAR: u32 = 1900;
const MAX_YEAR: u32 = 2100;

/// Returns `true` when `text` is a well-formed date that is not in the future.
pub fn is_valid_date(text: &str) -> bool {
    is_valid_date_on(text, Local::now().date_naive())
}

/// Same as [`is_valid_date`], measured against an explicit `today`.
pub fn is_valid_date_on(text: &str, today: NaiveDate) -> bool {
    let Some((day, month, year)) = parse_layout(text) else {
        return false;
    };
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    (year, month, day) <= (today.year() as u32, today.month(), today.day())
}

/// Validates `text`, carrying it back in the error on failure.
pub fn validate_date(text: &str) -> ValidationResult<()> {
    if is_valid_date(text) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDate(text.to_string()))
    }
}

// Splits "DD/MM/YYYY" into (day, month, year) when every non-separator byte is a digit.
fn parse_layout(text: &str) -> Option<(u32, u32, u32)> {
    let bytes = text.as_bytes();
    if bytes.len() != DATE_LEN || bytes[2] != SEPARATOR || bytes[5] != SEPARATOR {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let day = text[0..2].parse().ok()?;
    let month = text[3..5].parse().ok()?;
    let year = text[6..10].parse().ok()?;
    Some((day, month, year))
}
