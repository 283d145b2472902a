//! Handlers for rental endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::ApiResponse;
use crate::api::dto::rental::{CreateRentalRequest, RentalResponse};
use crate::api::extract::AppPath;
use crate::domain::entities::RentalRequest;
use crate::domain::errors::RentalError;
use crate::domain::rental_period::RentalPeriod;
use crate::error::AppError;
use crate::state::AppState;

/// Books a rental.
///
/// # Endpoint
///
/// `POST /api/rent/create`
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": 1,
///   "movie_ids": [1, 2],
///   "start_date": "2023-04-07",
///   "end_date": "2023-04-15"
/// }
/// ```
///
/// The body and both dates are checked before any lookup. The rental is
/// priced for the whole days between the two dates.
///
/// # Errors
///
/// Returns 400 if the body is malformed, a date is not `YYYY-MM-DD`, or the end
/// date precedes the start date.
/// Returns 404 if the user or a movie does not exist.
/// Returns 500 if the rental could not be stored.
pub async fn create_rental_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRentalRequest>, JsonRejection>,
) -> Result<ApiResponse<RentalResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| RentalError::InvalidRequestBody(rejection.body_text()))?;

    let period = RentalPeriod::parse(&payload.start_date, &payload.end_date)?;

    let request = RentalRequest {
        user_id: payload.user_id,
        movie_ids: payload.movie_ids,
        period,
    };

    let summary = state.rental_service.create_rental(request).await?;

    Ok(ApiResponse::success("Rent created successfully", summary.into()))
}

/// Returns a stored rental with its movies.
///
/// # Endpoint
///
/// `GET /api/rent/{id}`
///
/// # Errors
///
/// Returns 404 if the rental does not exist.
pub async fn get_rental_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<ApiResponse<RentalResponse>, AppError> {
    let summary = state.rental_service.get_rental(id).await?;

    Ok(ApiResponse::success("Rent found", summary.into()))
}
