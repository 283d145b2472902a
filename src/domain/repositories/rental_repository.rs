//! Repository trait for rental persistence.

use crate::domain::entities::{NewRental, Rental, RentalLineItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for rentals and their line items.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRentalRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Persists a rental and one line item per entry of `new_rental.movie_ids`
    /// as a single unit of work.
    ///
    /// Either every row is committed or none is: a failed insert rolls the
    /// whole rental back, and a failed commit is reported as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user or a movie no longer exists.
    /// Returns [`AppError::Internal`] on any other database error.
    async fn create_with_line_items(&self, new_rental: NewRental) -> Result<Rental, AppError>;

    /// Finds a rental by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, AppError>;

    /// Lists the line items of a rental in insertion order.
    async fn list_line_items(&self, rental_id: i64) -> Result<Vec<RentalLineItem>, AppError>;
}
