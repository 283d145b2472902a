//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation and business rules, and
//! expose a clean API to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::rental_service::RentalService`] - Rental booking and read-back
//! - [`services::movie_service::MovieService`] - Movie catalog with reference checks
//! - [`services::user_service::UserService`] - Customer management
//! - [`services::genre_service::GenreService`] - Genre management
//! - [`services::movie_type_service::MovieTypeService`] - Movie type management

pub mod services;
