//! Extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Path` answer bad input with plain-text bodies.
//! These wrappers keep the JSON error envelope for malformed bodies and
//! non-numeric ids.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor rejecting with a 400 envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor rejecting with a 400 envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
