//! Read models built from persisted rentals.
//!
//! Projections are pure: they take the rental and the movie snapshots that
//! were already loaded and never touch storage.

use chrono::NaiveDate;

use crate::domain::entities::{Movie, Rental};

/// Display data for one rented movie.
#[derive(Debug, Clone, PartialEq)]
pub struct RentedMovie {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<&Movie> for RentedMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name.clone(),
            price: movie.price,
        }
    }
}

/// Summary of a booked rental as returned to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalSummary {
    pub id: i64,
    pub user_id: i64,
    pub total: f64,
    pub movies: Vec<RentedMovie>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RentalSummary {
    /// Projects a rental and its movies (in line item order) into a summary.
    pub fn project(rental: &Rental, movies: &[Movie]) -> Self {
        Self {
            id: rental.id,
            user_id: rental.user_id,
            total: rental.total,
            movies: movies.iter().map(RentedMovie::from).collect(),
            start_date: rental.start_date,
            end_date: rental.end_date,
        }
    }
}
