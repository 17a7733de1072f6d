//! UC store HTTP presentation layer
//!
//! Serves the Telegram webhook, health probes and the read-only bundle
//! catalog.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::WebhookError;
pub use routes::create_router;
pub use state::AppState;
