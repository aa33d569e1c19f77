//! Liveness route handler.

/// GET / - confirm the service is up.
pub async fn index() -> &'static str {
    "Culture Heat Index API running"
}
