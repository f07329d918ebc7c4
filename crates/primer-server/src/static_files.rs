//! Static asset serving.
//!
//! Serves files from the configured assets directory under `/static/` with
//! MIME detection. Paths containing traversal components are rejected before
//! touching the filesystem.

use std::path::Component;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /static/{*path}.
pub(crate) async fn serve_asset(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let rel = std::path::Path::new(&path);
    if rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ServerError::InvalidAssetPath(path));
    }

    let full = state.assets_dir.join(rel);
    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
        }
        Err(_) => Err(ServerError::AssetNotFound(path)),
    }
}
