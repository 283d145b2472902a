//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Rows are
//! decoded into private `FromRow` structs and converted into domain entities.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Customers
//! - [`PgGenreRepository`] - Genres
//! - [`PgMovieTypeRepository`] - Movie types (pricing tiers)
//! - [`PgMovieRepository`] - Movie catalog with joined type and genre names
//! - [`PgRentalRepository`] - Transactional rental booking
//! - [`PgHealthRepository`] - Connectivity probe

pub mod pg_genre_repository;
pub mod pg_health_repository;
pub mod pg_movie_repository;
pub mod pg_movie_type_repository;
pub mod pg_rental_repository;
pub mod pg_user_repository;

pub use pg_genre_repository::PgGenreRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_movie_repository::PgMovieRepository;
pub use pg_movie_type_repository::PgMovieTypeRepository;
pub use pg_rental_repository::PgRentalRepository;
pub use pg_user_repository::PgUserRepository;
