//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{any, get},
};

use crate::{handlers, state::AppState};

/// Path Telegram is told to deliver updates to
pub const WEBHOOK_PATH: &str = "/webhook/telegram";

/// Create the main router with all routes
///
/// Bodies over `server.max_body_size_json_bytes` are rejected by the body
/// extractor, which lets the webhook handler still acknowledge them.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_json_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Catalog API (v1)
        .route("/v1/packages", get(handlers::catalog::list_packages))
        // Telegram webhook; method checks happen in the handler
        .route(WEBHOOK_PATH, any(handlers::telegram::handle_webhook))
        .route("/", any(handlers::telegram::handle_webhook))
        .layer(DefaultBodyLimit::max(body_limit))
        // Attach state
        .with_state(state)
}
