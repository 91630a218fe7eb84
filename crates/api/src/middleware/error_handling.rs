//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses with the fixed JSON body shape
//! `{"error": <message>}` used across the whole API.
//!
//! Both user-facing kinds map to 400: validation failures by nature, and
//! conflicts because the public wire contract reports an existing
//! reservation as a bad request rather than a 409. Store and internal
//! failures map to 500 without exposing a classified message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps [`BookingError`] and implements `IntoResponse`, so handlers return
/// `Result<Json<T>, AppError>` and use `?` on anything convertible.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::BAD_REQUEST,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Lets `?` lift raw store errors out of repository calls; they surface as
/// the `Database` kind.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a [`BookingError`] directly to an HTTP response.
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
