//! Shared API types
//!
//! The error body shape is part of the wire contract: clients receive
//! `{"error": <message>}` with a 400 status for every input error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard API error response
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The `number` query parameter was absent or empty
    MissingNumber,
    /// The `number` query parameter did not parse as a number
    InvalidNumber,
}

impl ApiError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingNumber => "No number provided",
            Self::InvalidNumber => "Invalid number format",
        }
    }
}

/// Error body serialized to clients
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
