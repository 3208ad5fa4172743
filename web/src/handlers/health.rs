//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use account_service_core::constants::messages;
use axum::http::StatusCode;

/// Simple health check endpoint (for basic liveness).
///
/// This endpoint does NOT check dependencies (database, collaborators).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Service banner kept for clients of the account API.
///
/// # Endpoint
///
/// ```text
/// GET /accounts/ping
/// ```
#[allow(clippy::unused_async)]
pub async fn ping() -> (StatusCode, &'static str) {
    (StatusCode::OK, messages::SERVICE_UP)
}
