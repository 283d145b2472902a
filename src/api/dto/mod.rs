//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Every response body is wrapped in [`ApiResponse`].

pub mod envelope;
pub mod genre;
pub mod health;
pub mod movie;
pub mod movie_type;
pub mod rental;
pub mod user;

pub use envelope::ApiResponse;
