//! Repository trait for genre data access.

use crate::domain::entities::{Genre, NewGenre};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing genres.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGenreRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn create(&self, new_genre: NewGenre) -> Result<Genre, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError>;

    async fn list(&self) -> Result<Vec<Genre>, AppError>;

    /// Renames a genre. Returns `Ok(None)` if it does not exist.
    async fn update(&self, id: i64, genre: NewGenre) -> Result<Option<Genre>, AppError>;

    /// Deletes a genre. Returns `Ok(false)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if movies still reference the genre.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
