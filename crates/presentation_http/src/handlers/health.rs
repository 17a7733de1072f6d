//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub telegram: TelegramStatus,
}

/// Status of the Telegram integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramStatus {
    /// A bot token is configured
    pub configured: bool,
    /// `getMe` succeeded with that token
    pub reachable: bool,
}

/// Readiness check - can webhook updates be answered?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let configured = state.dispatcher.is_configured();
    let reachable = match state.dispatcher.messenger() {
        Some(messenger) => messenger.is_available().await,
        None => false,
    };

    let ready = configured && reachable;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            telegram: TelegramStatus {
                configured,
                reachable,
            },
        }),
    )
}
