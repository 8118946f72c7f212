use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Address relay request: `POST /callback`.
///
/// The field is camelCase on the wire (`walletAddress`); the contract
/// predates this codebase and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallbackRequest {
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,
}

/// Response envelope for `POST /callback`.
///
/// `status` is `"success"` on acceptance and `"error"` otherwise; `message`
/// optionally carries the reason and is omitted from JSON when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallbackResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CallbackResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

/// What the callback server places on the host application's queue for each
/// accepted address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressUpdate {
    pub address: String,
    pub received_at: DateTime<Utc>,
}

impl AddressUpdate {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = CallbackRequest {
            wallet_address: "Addr123".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"walletAddress":"Addr123"}"#);
    }

    #[test]
    fn test_request_round_trips() {
        let parsed: CallbackRequest =
            serde_json::from_str(r#"{"walletAddress":"Addr123"}"#).unwrap();
        assert_eq!(parsed.wallet_address, "Addr123");
    }

    #[test]
    fn test_response_message_is_optional() {
        let parsed: CallbackResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn test_response_omits_absent_message() {
        let response = CallbackResponse {
            status: "success".to_string(),
            message: None,
        };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"status":"success"}"#);
    }

    #[test]
    fn test_error_envelope_carries_reason() {
        let response = CallbackResponse::error("Missing walletAddress");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"status":"error","message":"Missing walletAddress"}"#
        );
    }
}
