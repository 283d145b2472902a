//! Handlers for movie catalog endpoints.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::movie::{MovieItem, MovieRequest};
use crate::api::extract::{AppJson, AppPath};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a movie to the catalog.
///
/// # Endpoint
///
/// `POST /api/movies/create`
///
/// # Errors
///
/// Returns 400 if the body is invalid or `release_date` is not `YYYY-MM-DD`.
/// Returns 404 if the type or genre does not exist.
pub async fn create_movie_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MovieRequest>,
) -> Result<ApiResponse<MovieItem>, AppError> {
    payload.validate()?;
    let new_movie = payload.into_new_movie()?;

    let movie = state.movie_service.create_movie(new_movie).await?;

    Ok(ApiResponse::success("Movie created successfully", movie.into()))
}

/// `GET /api/movies/{id}`
pub async fn get_movie_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<MovieItem>, AppError> {
    let movie = state.movie_service.get_movie(id).await?;

    Ok(ApiResponse::success("Movie found", movie.into()))
}

/// `GET /api/movies`
pub async fn list_movies_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<MovieItem>>, AppError> {
    let movies = state.movie_service.list_movies().await?;

    Ok(ApiResponse::list(
        movies.into_iter().map(MovieItem::from).collect(),
        "Movies found",
        "No movies found",
    ))
}

/// Replaces a movie.
///
/// # Endpoint
///
/// `PUT /api/movies/update/{id}`
///
/// # Errors
///
/// Returns 400 if the body is invalid.
/// Returns 404 if the movie, type or genre does not exist.
pub async fn update_movie_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<MovieRequest>,
) -> Result<ApiResponse<MovieItem>, AppError> {
    payload.validate()?;
    let movie = payload.into_new_movie()?;

    let movie = state.movie_service.update_movie(id, movie).await?;

    Ok(ApiResponse::success("Movie updated successfully", movie.into()))
}

/// Removes a movie.
///
/// # Endpoint
///
/// `DELETE /api/movies/delete/{id}`
///
/// # Errors
///
/// Returns 404 if the movie does not exist.
/// Returns 409 if the movie was rented.
pub async fn delete_movie_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<()>, AppError> {
    state.movie_service.delete_movie(id).await?;

    Ok(ApiResponse::message_only("Movie deleted successfully"))
}
