//! Telegram webhook handler
//!
//! Telegram redelivers an update for as long as it gets a non-2xx reply, so
//! this handler answers `200` for every POST, including oversized or
//! malformed bodies and panics during processing. Only `OPTIONS` and other
//! methods are answered differently.

use std::panic::AssertUnwindSafe;

use application::{Acknowledgment, WebhookDispatcher};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use integration_telegram::parse_update;
use tracing::{debug, error, instrument, warn};

use crate::{error::WebhookError, state::AppState};

/// CORS preflight headers; the endpoint is also reachable from browsers
const PREFLIGHT_HEADERS: [(header::HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (header::ACCESS_CONTROL_MAX_AGE, "86400"),
];

/// Telegram webhook (any method)
///
/// The body is extracted as a `Result` so that a rejected body (e.g. one over
/// the configured size limit) is acknowledged instead of answered with `413`.
#[instrument(skip(state, body), fields(body_len = body.as_ref().map_or(0, Bytes::len)))]
pub async fn handle_webhook(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, PREFLIGHT_HEADERS).into_response();
    }

    if method != Method::POST {
        debug!(method = %method, "Rejecting non-POST webhook request");
        return WebhookError::MethodNotAllowed.into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(status = %rejection.status(), error = %rejection, "Webhook body rejected");
            let ack = WebhookError::MalformedPayload(rejection.body_text()).into_acknowledgment();
            return (StatusCode::OK, Json(ack)).into_response();
        },
    };

    let ack = match AssertUnwindSafe(process(&state.dispatcher, &body))
        .catch_unwind()
        .await
    {
        Ok(Ok(ack)) => ack,
        Ok(Err(e)) => {
            warn!(error = %e, "Webhook payload rejected");
            e.into_acknowledgment()
        },
        Err(panic) => {
            let reason = panic_message(panic.as_ref());
            error!(reason = %reason, "Webhook processing panicked");
            WebhookError::Panicked(reason).into_acknowledgment()
        },
    };

    (StatusCode::OK, Json(ack)).into_response()
}

async fn process(
    dispatcher: &WebhookDispatcher,
    body: &[u8],
) -> Result<Acknowledgment, WebhookError> {
    let update = parse_update(body).map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;
    Ok(dispatcher.dispatch(update.into_inbound()).await)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
