//! Success envelope shared by every endpoint.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `{ "status": "Success", "message": ..., "data": ... }`
///
/// `data` is omitted when there is nothing to return, e.g. after a delete or
/// for an empty list. Errors use [`crate::error::ErrorInfo`] instead.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "Success",
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: "Success",
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Wraps a list, dropping `data` and switching to `empty_message` when
    /// there are no items.
    pub fn list(items: Vec<T>, found_message: &str, empty_message: &str) -> Self {
        if items.is_empty() {
            Self::message_only(empty_message)
        } else {
            Self::success(found_message, items)
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
