//! Error types for the HTTP server.
//!
//! Content rendering never errors (it degrades to fallback HTML inside
//! `primer-content`), so the only handler errors here come from static
//! asset serving.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Asset not found at the given path.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Asset path contains traversal or non-normal components.
    #[error("Invalid asset path: {0}")]
    InvalidAssetPath(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::AssetNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Asset not found", "path": path}),
            ),
            Self::InvalidAssetPath(path) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid asset path", "path": path}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
