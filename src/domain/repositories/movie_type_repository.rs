//! Repository trait for movie type data access.

use crate::domain::entities::{MovieType, NewMovieType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing movie types.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMovieTypeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieTypeRepository: Send + Sync {
    async fn create(&self, new_type: NewMovieType) -> Result<MovieType, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<MovieType>, AppError>;

    async fn list(&self) -> Result<Vec<MovieType>, AppError>;

    /// Renames a movie type. Returns `Ok(None)` if it does not exist.
    async fn update(&self, id: i64, movie_type: NewMovieType)
    -> Result<Option<MovieType>, AppError>;

    /// Deletes a movie type. Returns `Ok(false)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if movies still reference the type.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
