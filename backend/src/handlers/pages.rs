//! # Page Handlers
//!
//! Serves the wallet connection page itself.
//!
//! `GET /connect` reads the built page from the static directory on every
//! request. A missing or unreadable file answers 500 with a plain message;
//! the page is the whole point of this server, so its absence is a server
//! error, not a client one.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::path::Path;
use tracing::{error, info};

use crate::server::AppState;

/// Serve the wallet connection page.
///
/// **Route**: `GET /connect`
pub async fn serve_connect_page(State(state): State<AppState>) -> Response {
    let index = Path::new(&state.static_dir).join("index.html");

    match tokio::fs::read_to_string(&index).await {
        Ok(contents) => {
            info!("serving connect page");
            Html(contents).into_response()
        }
        Err(e) => {
            error!("error serving connect page from {}: {e}", index.display());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading connection page.",
            )
                .into_response()
        }
    }
}
