//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::toc::get_toc_page))
        .route("/learn/{topic}", get(handlers::topics::get_topic))
        .route("/health", get(handlers::health::get_health))
        .route("/status", get(handlers::health::get_status))
        .route("/static/{*path}", get(static_files::serve_asset))
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Instant;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use primer_content::{ContentSource, MockSource, TopicRenderer};
    use tower::ServiceExt;

    use super::*;

    const TOC_DOC: &str = "\
# Learning Rust

## Table of Contents
- [Intro](#intro)
- [Ownership](#ownership)

footer text
";

    fn test_state(source: MockSource) -> Arc<AppState> {
        let source: Arc<dyn ContentSource> = Arc::new(source);
        Arc::new(AppState {
            renderer: TopicRenderer::new(Arc::clone(&source)),
            source,
            toc_file: "README.md".to_owned(),
            assets_dir: PathBuf::from("/nonexistent-assets"),
            verbose: false,
            version: "0.0.0-test".to_owned(),
            started: Instant::now(),
        })
    }

    fn test_router() -> Router {
        let source = MockSource::new()
            .with_content("README.md", TOC_DOC)
            .with_content("intro.md", "# Intro\n\nWelcome to **Rust**.")
            .with_failure("ownership.md");
        create_router(test_state(source))
    }

    async fn get_page(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_toc_page_lists_entries() {
        let (status, body) = get_page(test_router(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<a href=\"/learn/intro\">Intro</a>"));
        assert!(body.contains("<a href=\"/learn/ownership\">Ownership</a>"));
        assert!(!body.contains("footer text"));
    }

    #[tokio::test]
    async fn test_toc_page_with_missing_source_is_empty_list() {
        let router = create_router(test_state(MockSource::new()));

        let (status, body) = get_page(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No articles yet"));
    }

    #[tokio::test]
    async fn test_topic_page_renders_markdown() {
        let (status, body) = get_page(test_router(), "/learn/intro").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Intro</h1>"));
        assert!(body.contains("<strong>Rust</strong>"));
    }

    #[tokio::test]
    async fn test_missing_topic_shows_placeholder() {
        let (status, body) = get_page(test_router(), "/learn/future").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Coming Soon"));
        assert!(body.contains("future"));
    }

    #[tokio::test]
    async fn test_broken_topic_shows_error_page() {
        let (status, body) = get_page(test_router(), "/learn/ownership").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Something went wrong"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get_page(test_router(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_status_endpoint_reports_version() {
        let (status, body) = get_page(test_router(), "/status").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], "0.0.0-test");
        assert!(json["uptimeSeconds"].is_u64());
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let (status, _) = get_page(test_router(), "/static/missing.css").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_asset_traversal_is_rejected() {
        let (status, _) = get_page(test_router(), "/static/../secret.txt").await;

        // The traversal either fails to match the route or is rejected by the
        // handler; it must never reach the filesystem outside assets_dir.
        assert!(status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_existing_asset_is_served_with_mime() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("site.css"), "body{}").unwrap();
        let source: Arc<dyn ContentSource> = Arc::new(MockSource::new());
        let state = Arc::new(AppState {
            renderer: TopicRenderer::new(Arc::clone(&source)),
            source,
            toc_file: "README.md".to_owned(),
            assets_dir: dir.path().to_path_buf(),
            verbose: false,
            version: String::new(),
            started: Instant::now(),
        });
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/static/site.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert!(headers.contains_key("content-security-policy"));
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    }
}
