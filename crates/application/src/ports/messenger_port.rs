//! Messenger port - outbound calls to the chat platform

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{ChatId, InlineKeyboard, Screen};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// How the platform should interpret message markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[default]
    Html,
}

/// A message to deliver to a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Target chat
    pub chat_id: ChatId,
    /// Formatted body
    pub text: String,
    /// Markup interpretation of `text`
    pub parse_mode: ParseMode,
    /// Optional inline keyboard under the message
    pub keyboard: Option<InlineKeyboard>,
}

impl OutgoingMessage {
    /// Render `screen` for `chat_id`
    #[must_use]
    pub fn from_screen(chat_id: ChatId, screen: &Screen) -> Self {
        let content = screen.render();
        Self {
            chat_id,
            text: content.text,
            parse_mode: ParseMode::Html,
            keyboard: (!content.keyboard.is_empty()).then_some(content.keyboard),
        }
    }
}

/// Outbound port for the messaging platform
///
/// Implementations talk to the platform's HTTP API. The dispatcher treats
/// every call as fire-and-forget, so implementations should report failures
/// through the `Result` and never panic.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Send a message to a chat
    async fn send_message(&self, message: OutgoingMessage) -> Result<(), ApplicationError>;

    /// Acknowledge a callback query so the client stops its loading indicator
    async fn answer_callback(&self, callback_id: &str) -> Result<(), ApplicationError>;

    /// Check if the messaging service is reachable with the configured credential
    async fn is_available(&self) -> bool;
}
