//! Webhook error handling
//!
//! Only a wrong method is reported to the caller as an HTTP error. Every
//! other failure is folded into a `200` acknowledgment by the webhook handler.

use application::Acknowledgment;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Webhook error type
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid update payload: {0}")]
    MalformedPayload(String),

    #[error("Webhook processing panicked: {0}")]
    Panicked(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl WebhookError {
    /// Acknowledgment carrying this error; the status stays `200`
    #[must_use]
    pub fn into_acknowledgment(self) -> Acknowledgment {
        Acknowledgment::with_error(self.to_string())
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST, OPTIONS")],
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::MalformedPayload(_) | Self::Panicked(_) => {
                (StatusCode::OK, Json(self.into_acknowledgment())).into_response()
            },
        }
    }
}
