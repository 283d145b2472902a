//! Core domain entities of the video rental service.
//!
//! Entities are plain data structures. Creation and update inputs live in
//! separate structs so that ids and timestamps are always assigned by storage:
//!
//! - [`User`] / [`NewUser`]
//! - [`Genre`] / [`NewGenre`]
//! - [`MovieType`] / [`NewMovieType`]
//! - [`Movie`] / [`NewMovie`]
//! - [`Rental`] / [`NewRental`] / [`RentalLineItem`] / [`RentalRequest`]

pub mod genre;
pub mod movie;
pub mod movie_type;
pub mod rental;
pub mod user;

pub use genre::{Genre, NewGenre};
pub use movie::{Movie, NewMovie};
pub use movie_type::{MovieType, NewMovieType};
pub use rental::{NewRental, Rental, RentalLineItem, RentalRequest};
pub use user::{NewUser, User};
