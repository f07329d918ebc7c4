//! Health and status endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /health.
#[derive(Serialize)]
struct HealthResponse {
    /// Always "ok" while the process is serving.
    status: &'static str,
}

/// Response for GET /status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    /// Always "ok" while the process is serving.
    status: &'static str,
    /// Application version.
    version: String,
    /// Seconds since the server started.
    uptime_seconds: u64,
}

/// Handle GET /health.
pub(crate) async fn get_health() -> Json<impl Serialize> {
    Json(HealthResponse { status: "ok" })
}

/// Handle GET /status.
pub(crate) async fn get_status(State(state): State<Arc<AppState>>) -> Json<impl Serialize> {
    Json(StatusResponse {
        status: "ok",
        version: state.version.clone(),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}
