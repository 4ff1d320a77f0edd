//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use booking::BookingError;
use domain::TicketError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The purchase was rejected by validation.
    Rejected(TicketError),
    /// A downstream service failed after validation passed.
    Upstream(BookingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Rejected(err) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": err.to_string(), "reason": err.reason_code() }),
            ),
            ApiError::Upstream(err) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "error": err.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<TicketError> for ApiError {
    fn from(err: TicketError) -> Self {
        ApiError::Rejected(err)
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Rejected(err) => ApiError::Rejected(err),
            other => ApiError::Upstream(other),
        }
    }
}
