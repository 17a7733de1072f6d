//! Application state shared across handlers

use std::sync::Arc;

use application::WebhookDispatcher;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Routes webhook updates to screens
    pub dispatcher: Arc<WebhookDispatcher>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(dispatcher: WebhookDispatcher, config: AppConfig) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config: Arc::new(config),
        }
    }
}
