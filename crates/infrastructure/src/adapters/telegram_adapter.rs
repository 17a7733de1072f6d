//! Telegram messenger adapter
//!
//! Implements the `MessengerPort` trait using the Telegram integration crate.

use application::error::ApplicationError;
use application::ports::{MessengerPort, OutgoingMessage};
use async_trait::async_trait;
use integration_telegram::{
    InlineKeyboardMarkup, SendMessageRequest, TelegramClient, TelegramClientConfig, TelegramError,
};
use tracing::{debug, instrument};

use crate::config::TelegramConfig;

/// Adapter that implements `MessengerPort` using `TelegramClient`
pub struct TelegramMessengerAdapter {
    /// The underlying Telegram client
    client: TelegramClient,
}

impl TelegramMessengerAdapter {
    /// Create an adapter around an existing client
    #[must_use]
    pub const fn new(client: TelegramClient) -> Self {
        Self { client }
    }

    /// Build the client from application configuration
    ///
    /// # Errors
    /// Returns a configuration error if no usable bot token is set.
    pub fn from_config(config: &TelegramConfig) -> Result<Self, ApplicationError> {
        let token = config.bot_token_str().ok_or_else(|| {
            ApplicationError::Configuration("telegram.bot_token is not set".to_string())
        })?;

        let client_config =
            TelegramClientConfig::new(token).with_api_base_url(config.api_base_url.clone());
        let client = TelegramClient::new(client_config).map_err(map_error)?;
        Ok(Self::new(client))
    }
}

impl std::fmt::Debug for TelegramMessengerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramMessengerAdapter")
            .finish_non_exhaustive()
    }
}

fn map_error(error: TelegramError) -> ApplicationError {
    match error {
        TelegramError::Configuration(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(format!("Telegram request failed: {other}")),
    }
}

fn to_request(message: OutgoingMessage) -> SendMessageRequest {
    // HTML is the only parse mode the port offers.
    let request = SendMessageRequest::html(message.chat_id.as_i64(), message.text);
    match message.keyboard {
        Some(keyboard) => request.with_keyboard(InlineKeyboardMarkup::from(&keyboard)),
        None => request,
    }
}

#[async_trait]
impl MessengerPort for TelegramMessengerAdapter {
    #[instrument(skip(self, message), fields(chat_id = %message.chat_id))]
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), ApplicationError> {
        let sent = self
            .client
            .send_message(&to_request(message))
            .await
            .map_err(map_error)?;

        debug!(message_id = sent.message_id, "Telegram message sent");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn answer_callback(&self, callback_id: &str) -> Result<(), ApplicationError> {
        self.client
            .answer_callback_query(callback_id)
            .await
            .map_err(map_error)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_available().await
    }
}
