//! HTTP API for the preprocessing pipeline
//!
//! Routes:
//! - `GET  /`            - HTML form
//! - `GET  /health`      - Health check
//! - `POST /api/clean`   - Fetch a `.txt` URL, clean, analyze and summarize it
//! - `POST /api/analyze` - Statistics for submitted raw text
//!
//! Every JSON response carries a `success` flag; failures carry only `error`.

mod errors;
mod form;
mod handlers;

pub use errors::{handle_panic, ApiError, ErrorResponse};
pub use handlers::{AnalyzeResponse, CleanResponse, HealthResponse};

use crate::config::ServerConfig;
use crate::preprocess::Preprocessor;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub preprocessor: Arc<Preprocessor>,
}

impl AppState {
    pub fn new(preprocessor: Preprocessor) -> Self {
        Self {
            preprocessor: Arc::new(preprocessor),
        }
    }
}

/// Builds the router with all routes and middleware
///
/// `max_request_bytes` caps the accepted request body.
pub fn create_app(state: AppState, max_request_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/clean", post(handlers::clean_handler))
        .route("/api/analyze", post(handlers::analyze_handler))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(max_request_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Binds the listener and serves requests until Ctrl+C
pub async fn start_server(config: &ServerConfig, preprocessor: Preprocessor) -> crate::Result<()> {
    let app = create_app(AppState::new(preprocessor), config.max_request_bytes);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        crate::ConfigError::Validation(format!(
            "Invalid bind_address '{}': {}",
            config.bind_address, e
        ))
    })?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Text preprocessing service listening on {}", listener.local_addr()?);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /             - Web interface");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/clean    - Clean text from URL");
    tracing::info!("  POST /api/analyze  - Analyze raw text");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
