//! # Callback Handlers
//!
//! Receives the wallet address captured by the browser page.
//!
//! ## Endpoints
//!
//! - `POST /callback` - body `{"walletAddress": <string>}`; on acceptance the
//!   address is placed on the host application's queue and the fixed success
//!   envelope is returned
//! - `GET /health` - liveness probe
//!
//! ## Contract
//!
//! Success: HTTP 200, `{"status":"success","message":"Address received"}`.
//! Failure: 400 for a missing address or malformed JSON, 500 when the host
//! queue is full or gone, always `{"status":"error","message":<reason>}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shared::dto::callback::{AddressUpdate, CallbackRequest, CallbackResponse};
use shared::utils::truncate_address;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::server::AppState;

/// Receive the wallet address from the browser page.
///
/// **Route**: `POST /callback`
pub async fn receive_callback(
    State(state): State<AppState>,
    payload: Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CallbackResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("failed to decode callback body: {rejection}");
        AppError::InvalidInput("Invalid JSON".into())
    })?;

    if request.wallet_address.trim().is_empty() {
        warn!("received callback without walletAddress");
        return Err(AppError::InvalidInput("Missing walletAddress".into()));
    }

    info!(
        "received wallet address via callback: {}",
        truncate_address(&request.wallet_address)
    );

    let update = AddressUpdate::new(request.wallet_address);
    match state.updates.try_send(update) {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(CallbackResponse::success("Address received")),
        )),
        Err(TrySendError::Full(_)) => {
            error!("address queue is full, dropping update");
            Err(AppError::QueueFull)
        }
        Err(TrySendError::Closed(_)) => {
            error!("host queue receiver is gone");
            Err(AppError::Internal("host queue closed".into()))
        }
    }
}

/// Liveness probe.
///
/// **Route**: `GET /health`
pub async fn health() -> (StatusCode, Json<CallbackResponse>) {
    (StatusCode::OK, Json(CallbackResponse::success("ok")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::post;
    use axum::Router;
    use tokio::sync::mpsc;
    use tower::ServiceExt;

    fn test_app(capacity: usize) -> (Router, mpsc::Sender<AddressUpdate>, mpsc::Receiver<AddressUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        let app = Router::new()
            .route("/callback", post(receive_callback))
            .with_state(AppState {
                updates: tx.clone(),
                static_dir: "wallet-web/dist".to_string(),
            });
        (app, tx, rx)
    }

    fn post_callback(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/callback")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn response_envelope(response: axum::response::Response) -> CallbackResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_callback_accepts_address() {
        // Arrange
        let (app, _tx, mut rx) = test_app(4);

        // Act
        let response = app
            .oneshot(post_callback(r#"{"walletAddress":"Addr123"}"#))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let envelope = response_envelope(response).await;
        assert_eq!(envelope.status, "success");

        let update = rx.try_recv().expect("address should reach the host queue");
        assert_eq!(update.address, "Addr123");
    }

    #[tokio::test]
    async fn test_callback_missing_address_rejected() {
        let (app, _tx, mut rx) = test_app(4);

        let response = app
            .oneshot(post_callback(r#"{"walletAddress":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let envelope = response_envelope(response).await;
        assert_eq!(envelope.status, "error");
        assert_eq!(envelope.message.as_deref(), Some("Missing walletAddress"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_callback_malformed_json_rejected() {
        let (app, _tx, mut rx) = test_app(4);

        let response = app.oneshot(post_callback("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let envelope = response_envelope(response).await;
        assert_eq!(envelope.message.as_deref(), Some("Invalid JSON"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_callback_queue_full() {
        // Capacity one, never drained: the second address must be refused
        // without blocking the handler.
        let (app, _tx, _rx) = test_app(1);

        let first = app
            .clone()
            .oneshot(post_callback(r#"{"walletAddress":"Addr1"}"#))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(post_callback(r#"{"walletAddress":"Addr2"}"#))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = response_envelope(second).await;
        assert_eq!(envelope.message.as_deref(), Some("Queue full"));
    }

    #[tokio::test]
    async fn test_callback_closed_queue_is_internal_error() {
        let (app, _tx, rx) = test_app(4);
        drop(rx);

        let response = app
            .oneshot(post_callback(r#"{"walletAddress":"Addr123"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = response_envelope(response).await;
        assert_eq!(envelope.message.as_deref(), Some("Internal server error"));
    }
}
