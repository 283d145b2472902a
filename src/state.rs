//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    GenreService, MovieService, MovieTypeService, RentalService, UserService,
};
use crate::domain::repositories::{
    GenreRepository, HealthRepository, MovieRepository, MovieTypeRepository, RentalRepository,
    UserRepository,
};
use crate::infrastructure::persistence::{
    PgGenreRepository, PgHealthRepository, PgMovieRepository, PgMovieTypeRepository,
    PgRentalRepository, PgUserRepository,
};

/// One implementation of every repository the services need.
///
/// Production wiring uses [`Repositories::postgres`]; tests build the bundle
/// from in-memory implementations.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub movie_types: Arc<dyn MovieTypeRepository>,
    pub movies: Arc<dyn MovieRepository>,
    pub rentals: Arc<dyn RentalRepository>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            genres: Arc::new(PgGenreRepository::new(pool.clone())),
            movie_types: Arc::new(PgMovieTypeRepository::new(pool.clone())),
            movies: Arc::new(PgMovieRepository::new(pool.clone())),
            rentals: Arc::new(PgRentalRepository::new(pool.clone())),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }
}

/// Services shared across requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub genre_service: Arc<GenreService>,
    pub movie_type_service: Arc<MovieTypeService>,
    pub movie_service: Arc<MovieService>,
    pub rental_service: Arc<RentalService>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        let Repositories {
            users,
            genres,
            movie_types,
            movies,
            rentals,
            health,
        } = repositories;

        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            genre_service: Arc::new(GenreService::new(genres.clone())),
            movie_type_service: Arc::new(MovieTypeService::new(movie_types.clone())),
            movie_service: Arc::new(MovieService::new(movies.clone(), movie_types, genres)),
            rental_service: Arc::new(RentalService::new(users, movies, rentals)),
            health,
        }
    }
}
