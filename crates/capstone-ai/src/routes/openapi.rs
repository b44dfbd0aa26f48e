//! OpenAPI document for the service.

use axum::Json;
use utoipa::OpenApi;

use super::health::{self, HealthResponse};
use crate::APP_INFO;

#[derive(OpenApi)]
#[openapi(
    paths(health::check),
    components(schemas(HealthResponse)),
    tags((name = "health", description = "Process liveness"))
)]
struct ApiDoc;

/// Builds the OpenAPI document, titled and versioned from [`APP_INFO`].
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = APP_INFO.title.to_string();
    doc.info.version = APP_INFO.version.to_string();
    doc
}

/// GET /openapi.json — serves the OpenAPI document.
pub async fn get() -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc())
}
