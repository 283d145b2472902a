//! Repository trait for movie data access.

use crate::domain::entities::{Movie, NewMovie};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing movies.
///
/// Movies returned by this repository carry their type and genre names.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMovieRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Creates a new movie.
    ///
    /// Callers must check that the referenced type and genre exist; a dangling
    /// reference surfaces as [`AppError::Conflict`].
    async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError>;

    /// Finds a movie by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Movie))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Lists all movies ordered by id.
    async fn list(&self) -> Result<Vec<Movie>, AppError>;

    /// Replaces every field of an existing movie. Returns `Ok(None)` if it does not exist.
    async fn update(&self, id: i64, movie: NewMovie) -> Result<Option<Movie>, AppError>;

    /// Deletes a movie. Returns `Ok(false)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the movie appears in a rental.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
