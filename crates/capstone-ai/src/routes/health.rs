//! Health check endpoint.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Tag for OpenAPI documentation.
pub const HEALTH_TAG: &str = "health";

#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
}

/// GET /health — reports that the process is up.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthResponse, content_type = "application/json")
    )
)]
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
