//! # Report Outcome
//!
//! Interpretation of the callback endpoint's answer.
//!
//! The wire contract is fixed: the backend answers with a JSON envelope
//! `{"status": "success"}` on acceptance, and any other status/body
//! combination (optionally carrying `{"message": ...}`) on rejection. This
//! module turns an HTTP status code and response body into a
//! [`ReportOutcome`]; the transport itself lives in the frontend crate.
//!
//! A failed report never changes the connection state: the wallet stays
//! connected, only the relay failed. No retry is attempted.

use crate::error::ConnectorError;
use shared::dto::callback::CallbackResponse;

/// Result of delivering the connected wallet's address to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The backend accepted the address.
    Delivered,
    /// Well-formed response indicating refusal, with the server's reason.
    ServerRejected(String),
    /// The request could not complete at the transport level.
    NetworkFailure(String),
}

impl ReportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ReportOutcome::Delivered)
    }

    /// The error to surface, if any.
    pub fn into_error(self) -> Option<ConnectorError> {
        match self {
            ReportOutcome::Delivered => None,
            ReportOutcome::ServerRejected(reason) => Some(ConnectorError::RelayRejected(reason)),
            ReportOutcome::NetworkFailure(reason) => Some(ConnectorError::RelayUnreachable(reason)),
        }
    }
}

/// Interpret the callback endpoint's HTTP status and body.
///
/// Acceptance requires both a 2xx status and a parseable body whose `status`
/// field is `"success"`; anything else is a rejection carrying the
/// server-supplied `message` when one is present. A body that cannot be
/// parsed is deliberately classified as a rejection too (with a synthesized
/// reason): the server answered, so the relay is reachable, but acceptance
/// was never stated and must not be assumed.
pub fn interpret_response(status: u16, body: &str) -> ReportOutcome {
    let accepted = (200..300).contains(&status);
    match serde_json::from_str::<CallbackResponse>(body) {
        Ok(response) if accepted && response.status == "success" => ReportOutcome::Delivered,
        Ok(response) => ReportOutcome::ServerRejected(
            response
                .message
                .unwrap_or_else(|| format!("server declined the address (HTTP {status})")),
        ),
        Err(_) => {
            ReportOutcome::ServerRejected(format!("malformed response from server (HTTP {status})"))
        }
    }
}
