//! Handlers for movie type endpoints.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::movie_type::{MovieTypeItem, MovieTypeRequest};
use crate::api::extract::{AppJson, AppPath};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/types/create`
pub async fn create_type_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MovieTypeRequest>,
) -> Result<ApiResponse<MovieTypeItem>, AppError> {
    payload.validate()?;

    let movie_type = state.movie_type_service.create_type(payload.into()).await?;

    Ok(ApiResponse::success("Type created successfully", movie_type.into()))
}

/// `GET /api/types/{id}`
pub async fn get_type_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<MovieTypeItem>, AppError> {
    let movie_type = state.movie_type_service.get_type(id).await?;

    Ok(ApiResponse::success("Type found", movie_type.into()))
}

/// `GET /api/types`
pub async fn list_types_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<MovieTypeItem>>, AppError> {
    let types = state.movie_type_service.list_types().await?;

    Ok(ApiResponse::list(
        types.into_iter().map(MovieTypeItem::from).collect(),
        "Types found",
        "No types found",
    ))
}

/// `PUT /api/types/update/{id}`
pub async fn update_type_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<MovieTypeRequest>,
) -> Result<ApiResponse<MovieTypeItem>, AppError> {
    payload.validate()?;

    let movie_type = state
        .movie_type_service
        .update_type(id, payload.into())
        .await?;

    Ok(ApiResponse::success("Type updated successfully", movie_type.into()))
}

/// `DELETE /api/types/delete/{id}`
pub async fn delete_type_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<()>, AppError> {
    state.movie_type_service.delete_type(id).await?;

    Ok(ApiResponse::message_only("Type deleted successfully"))
}
