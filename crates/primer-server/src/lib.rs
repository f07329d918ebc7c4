//! HTTP server for the Primer learning site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - The table-of-contents page at `/`
//! - Rendered topic articles under `/learn/{topic}`
//! - Health and status endpoints
//! - Static assets under `/static/`
//!
//! All content failure modes degrade to valid HTML inside `primer-content`;
//! the handlers here stay thin dispatch.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use primer_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 3000,
//!         content_dir: PathBuf::from("content"),
//!         toc_file: "README.md".to_string(),
//!         assets_dir: PathBuf::from("static"),
//!         verbose: false,
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use primer_content::{ContentSource, FsSource, TopicRenderer};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory containing per-topic markdown documents.
    pub content_dir: PathBuf,
    /// TOC source document, relative to `content_dir`.
    pub toc_file: String,
    /// Directory of static assets served under `/static/`.
    pub assets_dir: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (reported by `/status`).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            content_dir: PathBuf::from("content"),
            toc_file: "README.md".to_string(),
            assets_dir: PathBuf::from("static"),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source: Arc<dyn ContentSource> = Arc::new(FsSource::new(config.content_dir.clone()));

    let state = Arc::new(AppState {
        renderer: TopicRenderer::new(Arc::clone(&source)),
        source,
        toc_file: config.toc_file.clone(),
        assets_dir: config.assets_dir.clone(),
        verbose: config.verbose,
        version: config.version.clone(),
        started: Instant::now(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Primer config.
///
/// # Arguments
///
/// * `config` - Primer configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &primer_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content_resolved.source_dir.clone(),
        toc_file: config.content_resolved.toc_file.clone(),
        assets_dir: config.content_resolved.assets_dir.clone(),
        verbose,
        version,
    }
}
