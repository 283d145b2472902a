//! Handlers for genre endpoints.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::genre::{GenreItem, GenreRequest};
use crate::api::extract::{AppJson, AppPath};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/genres/create`
pub async fn create_genre_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenreRequest>,
) -> Result<ApiResponse<GenreItem>, AppError> {
    payload.validate()?;

    let genre = state.genre_service.create_genre(payload.into()).await?;

    Ok(ApiResponse::success("Genre created successfully", genre.into()))
}

/// `GET /api/genres/{id}`
pub async fn get_genre_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<GenreItem>, AppError> {
    let genre = state.genre_service.get_genre(id).await?;

    Ok(ApiResponse::success("Genre found", genre.into()))
}

/// `GET /api/genres`
pub async fn list_genres_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<GenreItem>>, AppError> {
    let genres = state.genre_service.list_genres().await?;

    Ok(ApiResponse::list(
        genres.into_iter().map(GenreItem::from).collect(),
        "Genres found",
        "No genres found",
    ))
}

/// `PUT /api/genres/update/{id}`
pub async fn update_genre_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenreRequest>,
) -> Result<ApiResponse<GenreItem>, AppError> {
    payload.validate()?;

    let genre = state.genre_service.update_genre(id, payload.into()).await?;

    Ok(ApiResponse::success("Genre updated successfully", genre.into()))
}

/// Deletes a genre.
///
/// # Endpoint
///
/// `DELETE /api/genres/delete/{id}`
///
/// # Errors
///
/// Returns 409 while movies still use the genre.
pub async fn delete_genre_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<()>, AppError> {
    state.genre_service.delete_genre(id).await?;

    Ok(ApiResponse::message_only("Genre deleted successfully"))
}
