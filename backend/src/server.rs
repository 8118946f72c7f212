//! # Server Setup
//!
//! Router construction and HTTP server startup for the callback service.
//!
//! Routes:
//! - `POST /callback` - receive the connected wallet address
//! - `GET /connect` - serve the wallet connection page
//! - `GET /health` - liveness probe
//! - everything else falls back to the static dist directory

use axum::{
    routing::{get, post},
    Router,
};
use shared::dto::callback::AddressUpdate;
use tokio::sync::mpsc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Bounded queue delivering accepted addresses to the host application.
    pub updates: mpsc::Sender<AddressUpdate>,
    /// Directory holding the built wallet page.
    pub static_dir: String,
}

/// Build the router. Separated from [`start_server`] so handler tests can
/// drive it without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        .route("/callback", post(handlers::callback::receive_callback))
        .route("/health", get(handlers::callback::health))
        .route("/connect", get(handlers::pages::serve_connect_page))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize and start the HTTP server.
///
/// Runs until a shutdown signal (ctrl-c) arrives. Binding fails if the port
/// is already in use; the caller decides what to do about that.
pub async fn start_server(
    config: Config,
    updates: mpsc::Sender<AddressUpdate>,
) -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let state = AppState {
        updates,
        static_dir: config.static_dir.clone(),
    };
    let app = build_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("callback server listening at http://{bind_address}");
    info!("serving wallet page from {}", config.static_dir);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("callback server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
