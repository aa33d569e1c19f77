//! API error responses.
//!
//! The three caller-visible failure shapes of the service. Normalization
//! problems never appear here; malformed model replies still produce a
//! 200 with defaults.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use chi_openai::ClientError;

/// Errors surfaced by the API.
#[derive(Debug)]
pub enum ApiError {
    /// No usable brand in the request body (400).
    BrandRequired,
    /// The bearer guard rejected the request (401).
    Unauthorized,
    /// The completion call failed (500).
    Upstream(ClientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BrandRequired => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "brand required" }),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "unauthorized" }),
            ),
            ApiError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "upstream_error", "detail": err.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
