//! Failure kinds of the rental booking workflow.

use std::fmt;

use serde_json::{Value, json};

use crate::error::AppError;
use crate::utils::calendar_date::DateParseError;

/// Which date of a rental request failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn as_str(self) -> &'static str {
        match self {
            DateField::Start => "start_date",
            DateField::End => "end_date",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => f.write_str("start date"),
            DateField::End => f.write_str("end date"),
        }
    }
}

/// Errors raised while validating, pricing or persisting a rental.
///
/// Validation variants are produced before any lookup, not-found variants
/// before any write, and [`RentalError::Storage`] only after the unit of work
/// has been rolled back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RentalError {
    #[error("Invalid request body... {0}")]
    InvalidRequestBody(String),

    #[error("Invalid {field}... {source}")]
    InvalidDate {
        field: DateField,
        source: DateParseError,
    },

    #[error("The end date must be greater than the start date")]
    InvalidDateRange { start: String, end: String },

    #[error("user with ID {0} not found")]
    UserNotFound(i64),

    #[error("movie with ID {0} not found")]
    MovieNotFound(i64),

    #[error("{0}")]
    Storage(String),
}

impl RentalError {
    /// Wraps a storage-layer failure.
    pub fn storage(err: AppError) -> Self {
        RentalError::Storage(err.to_string())
    }
}

impl From<RentalError> for AppError {
    fn from(err: RentalError) -> Self {
        match &err {
            RentalError::InvalidRequestBody(_) => AppError::bad_request(err.to_string(), Value::Null),
            RentalError::InvalidDate { field, .. } => {
                AppError::bad_request(err.to_string(), json!({ "field": field.as_str() }))
            }
            RentalError::InvalidDateRange { start, end } => AppError::bad_request(
                err.to_string(),
                json!({ "start_date": start, "end_date": end }),
            ),
            RentalError::UserNotFound(id) => AppError::not_found(
                format!("Unable to create rent... {err}"),
                json!({ "user_id": id }),
            ),
            RentalError::MovieNotFound(id) => AppError::not_found(
                format!("Unable to create rent... {err}"),
                json!({ "movie_id": id }),
            ),
            RentalError::Storage(_) => {
                AppError::internal(format!("Unable to create rent... {err}"), Value::Null)
            }
        }
    }
}
