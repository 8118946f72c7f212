//! Address Reporter
//!
//! Delivers the connected wallet's address to the callback endpoint and
//! classifies the result. One request per connect event, no retry, no
//! timeout beyond what the browser's network stack enforces; a failed report
//! never changes the connection state.

use gloo_net::http::Request;
use lib_connection::report::{interpret_response, ReportOutcome};
use shared::dto::callback::CallbackRequest;

use crate::utils::constants::CALLBACK_URL;

/// POST the address to the callback endpoint and interpret the answer.
pub async fn report_address(address: &str) -> ReportOutcome {
    let payload = CallbackRequest {
        wallet_address: address.to_string(),
    };

    let request = match Request::post(CALLBACK_URL).json(&payload) {
        Ok(request) => request,
        Err(e) => {
            return ReportOutcome::NetworkFailure(format!("failed to encode request: {e}"));
        }
    };

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::info!("callback responded with HTTP {status}");
            interpret_response(status, &body)
        }
        Err(e) => {
            log::warn!("callback request failed: {e}");
            ReportOutcome::NetworkFailure(e.to_string())
        }
    }
}
