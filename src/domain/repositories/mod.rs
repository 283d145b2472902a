//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! Services depend on `Arc<dyn ...Repository>` so the storage engine is chosen
//! at wiring time.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - PostgreSQL implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Customer CRUD
//! - [`GenreRepository`] - Genre CRUD
//! - [`MovieTypeRepository`] - Movie type CRUD
//! - [`MovieRepository`] - Movie CRUD
//! - [`RentalRepository`] - Atomic rental booking and read-back
//! - [`HealthRepository`] - Storage connectivity probe

pub mod genre_repository;
pub mod health_repository;
pub mod movie_repository;
pub mod movie_type_repository;
pub mod rental_repository;
pub mod user_repository;

pub use genre_repository::GenreRepository;
pub use health_repository::HealthRepository;
pub use movie_repository::MovieRepository;
pub use movie_type_repository::MovieTypeRepository;
pub use rental_repository::RentalRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use movie_type_repository::MockMovieTypeRepository;
#[cfg(test)]
pub use rental_repository::MockRentalRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
