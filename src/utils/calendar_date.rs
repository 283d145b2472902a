//! Calendar date parsing for request payloads.
//!
//! Dates travel as `YYYY-MM-DD` strings with no time component and no
//! timezone. Parsing is strict: both month and day must be zero-padded, so
//! `2023-4-7` and `15-04-2023` are both rejected.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Wire format shared by every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex is valid"));

/// Errors that can occur while parsing a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("expected a date in YYYY-MM-DD format, got '{0}'")]
    InvalidFormat(String),

    #[error("'{value}' is not a valid calendar date: {reason}")]
    OutOfRange { value: String, reason: String },
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`DateParseError::InvalidFormat`] when the string does not have the
/// `YYYY-MM-DD` shape, and [`DateParseError::OutOfRange`] for well-shaped
/// strings that name no real day (e.g. `2023-02-30`).
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    if !DATE_REGEX.is_match(value) {
        return Err(DateParseError::InvalidFormat(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| DateParseError::OutOfRange {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a date back into the wire format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
