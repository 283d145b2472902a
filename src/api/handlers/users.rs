//! Handlers for customer endpoints.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::user::{UserItem, UserRequest};
use crate::api::extract::{AppJson, AppPath};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users/create`
///
/// # Errors
///
/// Returns 400 if the body is malformed or a name is empty.
pub async fn create_user_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<ApiResponse<UserItem>, AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok(ApiResponse::success("User created successfully", user.into()))
}

/// `GET /api/users/{id}`
pub async fn get_user_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<UserItem>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(ApiResponse::success("User found", user.into()))
}

/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(ApiResponse::list(
        users.into_iter().map(UserItem::from).collect(),
        "Users found",
        "No users found",
    ))
}

/// Replaces both names of a user.
///
/// # Endpoint
///
/// `PUT /api/users/update/{id}`
///
/// # Errors
///
/// Returns 400 if the body is invalid.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<ApiResponse<UserItem>, AppError> {
    payload.validate()?;

    let user = state.user_service.update_user(id, payload.into()).await?;

    Ok(ApiResponse::success("User updated successfully", user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/delete/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 409 if the user has rentals.
pub async fn delete_user_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<()>, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(ApiResponse::message_only("User deleted successfully"))
}
