//! Repository trait for customer data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by id.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces the names of an existing user.
    ///
    /// Returns `Ok(None)` if no user has the given id.
    async fn update(&self, id: i64, user: NewUser) -> Result<Option<User>, AppError>;

    /// Deletes a user.
    ///
    /// Returns `Ok(false)` if no user has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user still has rentals.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
