//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — liveness probe. Ignores the request body and headers.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
