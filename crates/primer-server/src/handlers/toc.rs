//! Table-of-contents page endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use primer_content::{load_toc, toc_page};

use crate::state::AppState;

/// Handle GET /.
///
/// Always returns a complete HTML page; a missing or unreadable TOC source
/// degrades to an empty contents list.
pub(crate) async fn get_toc_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let entries = load_toc(state.source.as_ref(), &state.toc_file);
    if state.verbose {
        tracing::info!(count = entries.len(), "Serving table of contents");
    }
    Html(toc_page(&entries))
}
