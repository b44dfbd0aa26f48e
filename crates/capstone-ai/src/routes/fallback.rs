//! Catch-all for requests no route matched.

use axum::http::{Method, Uri};

use crate::error::ApiError;

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "no route matched");
    ApiError::NotFound(format!("not found: {}", uri.path()))
}
