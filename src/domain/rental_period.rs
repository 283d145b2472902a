//! Validated rental date range.

use chrono::NaiveDate;

use crate::domain::errors::{DateField, RentalError};
use crate::utils::calendar_date::{format_date, parse_date};

/// Inclusive calendar date range of a rental, guaranteed `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl RentalPeriod {
    /// Builds a period from already parsed dates.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidDateRange`] if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RentalError> {
        if start > end {
            return Err(RentalError::InvalidDateRange {
                start: format_date(start),
                end: format_date(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses both `YYYY-MM-DD` dates and checks their ordering.
    ///
    /// The start date is parsed first, so a request with two bad dates reports
    /// the start date.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidDate`] naming the field that failed to parse,
    /// or [`RentalError::InvalidDateRange`] if the end date precedes the start date.
    pub fn parse(start: &str, end: &str) -> Result<Self, RentalError> {
        let start = parse_date(start).map_err(|source| RentalError::InvalidDate {
            field: DateField::Start,
            source,
        })?;
        let end = parse_date(end).map_err(|source| RentalError::InvalidDate {
            field: DateField::End,
            source,
        })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of whole days between start and end.
    ///
    /// A same-day rental lasts zero days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
