//! Telegram Bot API client
//!
//! Every method is a single HTTP call to `{api_base_url}/bot{token}/{method}`.
//! Replies come wrapped in an `{"ok": ..., "result": ...}` envelope.

use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::types::{AnswerCallbackQueryRequest, ApiResponse, BotUser, SendMessageRequest, SentMessage};

/// Public Bot API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Telegram API errors
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API error: {code} - {description}")]
    Api { code: i32, description: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(error: reqwest::Error) -> Self {
        // Request URLs embed the bot token.
        Self::Request(error.without_url())
    }
}

/// Telegram client configuration
#[derive(Clone)]
pub struct TelegramClientConfig {
    /// Bot token issued by BotFather
    pub bot_token: String,
    /// API base URL, overridable for tests and local Bot API servers
    pub api_base_url: String,
}

impl TelegramClientConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl std::fmt::Debug for TelegramClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClientConfig")
            .field("bot_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Telegram client for the Bot API
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient").finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a new Telegram client
    pub fn new(config: TelegramClientConfig) -> Result<Self, TelegramError> {
        Self::with_client(config, Client::new())
    }

    /// Create a client that reuses an existing connection pool
    pub fn with_client(config: TelegramClientConfig, client: Client) -> Result<Self, TelegramError> {
        let token = config.bot_token.trim();
        if token.is_empty() {
            return Err(TelegramError::Configuration(
                "bot_token is required".to_string(),
            ));
        }

        let base_url = format!(
            "{}/bot{}",
            config.api_base_url.trim_end_matches('/'),
            token
        );

        Ok(Self { client, base_url })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    /// Send a message
    #[instrument(skip(self, request), fields(chat_id = request.chat_id))]
    pub async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SentMessage, TelegramError> {
        debug!(
            text_len = request.text.len(),
            has_keyboard = request.reply_markup.is_some(),
            "Sending Telegram message"
        );
        self.post("sendMessage", request).await
    }

    /// Acknowledge a callback query so the client stops its loading indicator
    #[instrument(skip(self))]
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<(), TelegramError> {
        let request = AnswerCallbackQueryRequest { callback_query_id };
        let _: bool = self.post("answerCallbackQuery", &request).await?;
        Ok(())
    }

    /// Fetch the bot's own account
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<BotUser, TelegramError> {
        let response = self.client.get(self.method_url("getMe")).send().await?;
        read_response(response).await
    }

    /// Whether the API accepts the configured token
    pub async fn is_available(&self) -> bool {
        match self.get_me().await {
            Ok(bot) => {
                debug!(bot_id = bot.id, username = ?bot.username, "Telegram API reachable");
                true
            },
            Err(e) => {
                debug!(error = %e, "Telegram API not reachable");
                false
            },
        }
    }

    async fn post<B, T>(&self, method: &str, body: &B) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?;
        read_response(response).await
    }
}

/// Unwrap the Bot API envelope
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, TelegramError> {
    let status = response.status();
    let status_code = i32::from(status.as_u16());

    let envelope: ApiResponse<T> = match response.json().await {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(e.into()),
        Err(_) => {
            return Err(TelegramError::Api {
                code: status_code,
                description: status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string(),
            });
        },
    };

    match envelope {
        ApiResponse {
            ok: true,
            result: Some(result),
            ..
        } if status.is_success() => Ok(result),
        ApiResponse {
            error_code,
            description,
            ..
        } => Err(TelegramError::Api {
            code: error_code.unwrap_or(status_code),
            description: description.unwrap_or_else(|| "no description".to_string()),
        }),
    }
}
