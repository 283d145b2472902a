//! Business logic services for the application layer.

pub mod genre_service;
pub mod movie_service;
pub mod movie_type_service;
pub mod rental_service;
pub mod user_service;

pub use genre_service::GenreService;
pub use movie_service::MovieService;
pub use movie_type_service::MovieTypeService;
pub use rental_service::RentalService;
pub use user_service::UserService;
