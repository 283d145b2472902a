//! Domain layer containing business entities and logic.
//!
//! This module is independent of HTTP and of the storage engine.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`pricing`] - Tiered rental pricing
//! - [`rental_period`] - Validated rental date range
//! - [`read_models`] - Rental summaries projected from stored data
//! - [`errors`] - Failure kinds of the booking workflow
//!
//! # Booking Flow
//!
//! 1. HTTP handler parses the dates into a [`rental_period::RentalPeriod`]
//! 2. [`crate::application::services::RentalService`] resolves the user and movies
//! 3. [`pricing::calculate_total`] prices the movies for the period
//! 4. [`repositories::RentalRepository::create_with_line_items`] persists everything in one transaction
//! 5. [`read_models::RentalSummary::project`] builds the response

pub mod entities;
pub mod errors;
pub mod pricing;
pub mod read_models;
pub mod rental_period;
pub mod repositories;
