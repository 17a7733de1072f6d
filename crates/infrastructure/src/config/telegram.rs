//! Telegram bot configuration.

use integration_telegram::client::DEFAULT_API_BASE_URL;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Telegram Bot API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// Bot API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_base_url: default_api_base_url(),
        }
    }
}

impl TelegramConfig {
    /// Get the bot token as a string reference (for API calls)
    ///
    /// A blank token counts as absent.
    #[must_use]
    pub fn bot_token_str(&self) -> Option<&str> {
        self.bot_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Whether a usable bot token is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.bot_token_str().is_some()
    }
}
