//! HTTP server for the math and text operations
//!
//! Endpoints:
//! - GET  /       - Server info and endpoint discovery
//! - GET  /health - Health check
//! - POST /math   - Numeric operations
//! - POST /text   - Text operations

pub mod error;
pub mod handlers;
pub mod types;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::core::primitives::{DEFAULT_REQUEST_TIMEOUT_SECS, MAX_BODY_BYTES};

pub use error::{ApiError, ApiResult};
pub use types::API_VERSION;

// ============================================================================
// Server State
// ============================================================================

/// Immutable per-process state; operations themselves are stateless
#[derive(Clone)]
pub struct AppState {
    pub info: Arc<types::ServerInfo>,
    pub request_timeout: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            info: Arc::new(types::ServerInfo::default()),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            request_timeout: config.request_timeout,
            ..Default::default()
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // API version header on all responses
    let version_header = SetResponseHeaderLayer::if_not_present(
        header::HeaderName::from_static("x-api-version"),
        HeaderValue::from_static(API_VERSION),
    );

    let timeout =
        TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, state.request_timeout);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/math", post(handlers::math_handler))
        .route("/text", post(handlers::text_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(timeout)
        .layer(version_header)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    let app = create_router(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Server listening on http://{}", bind_address);
    info!("Request timeout: {}s", config.request_timeout.as_secs());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
