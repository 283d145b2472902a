//! API route configuration.
//!
//! Paths follow the `/{resource}/create`, `/{resource}/update/{id}` and
//! `/{resource}/delete/{id}` layout used by existing clients.

use crate::api::handlers::{
    create_rental_handler, genres, get_rental_handler, movie_types, movies, users,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// All API routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET    /users`, `/genres`, `/types`, `/movies`          - List
/// - `GET    /{resource}/{id}`                                - Fetch one
/// - `POST   /{resource}/create`                              - Create
/// - `PUT    /{resource}/update/{id}`                         - Replace
/// - `DELETE /{resource}/delete/{id}`                         - Delete
/// - `POST   /rent/create`                                    - Book a rental
/// - `GET    /rent/{id}`                                      - Fetch a rental
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users_handler))
        .route("/users/{id}", get(users::get_user_handler))
        .route("/users/create", post(users::create_user_handler))
        .route("/users/update/{id}", put(users::update_user_handler))
        .route("/users/delete/{id}", delete(users::delete_user_handler))
        .route("/genres", get(genres::list_genres_handler))
        .route("/genres/{id}", get(genres::get_genre_handler))
        .route("/genres/create", post(genres::create_genre_handler))
        .route("/genres/update/{id}", put(genres::update_genre_handler))
        .route("/genres/delete/{id}", delete(genres::delete_genre_handler))
        .route("/types", get(movie_types::list_types_handler))
        .route("/types/{id}", get(movie_types::get_type_handler))
        .route("/types/create", post(movie_types::create_type_handler))
        .route("/types/update/{id}", put(movie_types::update_type_handler))
        .route("/types/delete/{id}", delete(movie_types::delete_type_handler))
        .route("/movies", get(movies::list_movies_handler))
        .route("/movies/{id}", get(movies::get_movie_handler))
        .route("/movies/create", post(movies::create_movie_handler))
        .route("/movies/update/{id}", put(movies::update_movie_handler))
        .route("/movies/delete/{id}", delete(movies::delete_movie_handler))
        .route("/rent/create", post(create_rental_handler))
        .route("/rent/{id}", get(get_rental_handler))
}
