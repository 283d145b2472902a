//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and wraps every
//! result in the `{status, message, data}` envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors rejecting with the error envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
