//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! Slotbook API. It maps the engine's error taxonomy to HTTP status codes
//! and JSON error responses, so every endpoint fails the same way.
//!
//! Coverage and admission failures are expected business outcomes and map
//! to 4xx; store failures are infrastructure faults and map to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps [`BookingError`] and implements `IntoResponse` to
/// convert it into an HTTP response with the appropriate status code and a
/// JSON payload.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Coverage(_) => StatusCode::BAD_REQUEST,
            BookingError::Rejected(_) => StatusCode::BAD_REQUEST,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::PreconditionFailed(_) => StatusCode::CONFLICT,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError.
///
/// Allows using the `?` operator with functions that return
/// `Result<T, BookingError>` in handlers returning `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Repository failures surface as `StoreUnavailable`; handlers never
/// inspect infrastructure errors beyond that.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::StoreUnavailable(err))
    }
}
