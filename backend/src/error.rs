use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::dto::callback::CallbackResponse;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Update queue is full")]
    QueueFull,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::QueueFull | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message for the fixed JSON envelope. Client-facing, so internal
    /// details stay out of it.
    pub fn envelope_message(&self) -> String {
        match self {
            AppError::Config(_) => "Server configuration error".to_string(),
            AppError::InvalidInput(message) => message.clone(),
            AppError::QueueFull => "Queue full".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = CallbackResponse::error(self.envelope_message());
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidInput("Missing walletAddress".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::QueueFull.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Internal("oops".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let error = AppError::Internal("receiver dropped".into());
        assert_eq!(error.envelope_message(), "Internal server error");
    }
}
