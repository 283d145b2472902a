//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod genres;
pub mod health;
pub mod movie_types;
pub mod movies;
pub mod rentals;
pub mod users;

pub use health::health_handler;
pub use rentals::{create_rental_handler, get_rental_handler};
