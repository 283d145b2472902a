//! Rental aggregate and its line items.

use chrono::{DateTime, NaiveDate, Utc};

/// A persisted booking of one or more movies by a user.
///
/// Rentals are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    pub id: i64,
    pub user_id: i64,
    pub total: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Join row linking a rental to one rented movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalLineItem {
    pub id: i64,
    pub rental_id: i64,
    pub movie_id: i64,
}

/// Input data for persisting a rental together with its line items.
///
/// `movie_ids` keeps request order and may contain duplicates; one line item
/// is written per entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRental {
    pub user_id: i64,
    pub total: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub movie_ids: Vec<i64>,
}

/// Validated booking request handed to the rental service.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRequest {
    pub user_id: i64,
    pub movie_ids: Vec<i64>,
    pub period: crate::domain::rental_period::RentalPeriod,
}
