//! Optional bearer-token guard for the API routes.
//!
//! Active only when a public token is configured; without one every
//! request passes through. The liveness route is never guarded.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Reject API requests whose bearer token does not match the configured one.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = &state.public_token else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if presented == Some(expected.as_str()) {
        next.run(request).await
    } else {
        ApiError::Unauthorized.into_response()
    }
}
