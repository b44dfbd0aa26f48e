//! Capstone AI HTTP service.
//!
//! Serves a single health check endpoint for load balancers and
//! orchestrators, with structured logging (tracing), Prometheus metrics and
//! an OpenAPI document describing the HTTP surface.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Static identity of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub title: &'static str,
    pub version: &'static str,
}

/// The identity this build reports.
pub const APP_INFO: AppInfo = AppInfo {
    title: "Capstone AI",
    version: env!("CARGO_PKG_VERSION"),
};

impl AppInfo {
    /// Records a constant `build_info` gauge labelled with title and version.
    pub fn record_build_info(&self) {
        metrics::gauge!("build_info", "title" => self.title, "version" => self.version).set(1.0);
    }
}

/// Creates the Axum application router.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/openapi.json", get(routes::openapi::get))
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_info_reports_crate_version() {
        assert_eq!(APP_INFO.title, "Capstone AI");
        assert_eq!(APP_INFO.version, "0.1.0");
    }
}
