//! Topic article endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::state::AppState;

/// Handle GET /learn/{topic}.
///
/// The renderer never fails: missing topics get a placeholder page and read
/// failures get a generic error page, so the response is always 200 HTML.
pub(crate) async fn get_topic(
    Path(topic): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    if state.verbose {
        tracing::info!(topic = %topic, "Rendering topic page");
    }
    Html(state.renderer.render(&topic))
}
