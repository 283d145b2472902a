//! DTOs for rental endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::read_models::{RentalSummary, RentedMovie};
use crate::utils::calendar_date::format_date;

/// Request body for `POST /api/rent/create`.
///
/// Dates stay as strings here; they are parsed into a
/// [`crate::domain::rental_period::RentalPeriod`] by the handler so that a bad
/// date can name the offending field. Ids are not range-checked: an unknown
/// user or movie is reported by the booking as not found, and an empty
/// `movie_ids` books a rental with no line items.
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub user_id: i64,
    pub movie_ids: Vec<i64>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct RentedMovieItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<RentedMovie> for RentedMovieItem {
    fn from(m: RentedMovie) -> Self {
        RentedMovieItem {
            id: m.id,
            name: m.name,
            price: m.price,
        }
    }
}

/// Booked rental as returned to clients.
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: i64,
    pub user_id: i64,
    pub total: f64,
    pub movies: Vec<RentedMovieItem>,
    pub start_date: String,
    pub end_date: String,
}

impl From<RentalSummary> for RentalResponse {
    fn from(s: RentalSummary) -> Self {
        RentalResponse {
            id: s.id,
            user_id: s.user_id,
            total: s.total,
            movies: s.movies.into_iter().map(RentedMovieItem::from).collect(),
            start_date: format_date(s.start_date),
            end_date: format_date(s.end_date),
        }
    }
}
