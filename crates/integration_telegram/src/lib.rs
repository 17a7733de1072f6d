//! Telegram integration
//!
//! Bot API client for sending messages and answering callback queries, plus
//! the subset of the webhook update schema the store bot reacts to.

pub mod client;
pub mod types;
pub mod webhook;

pub use client::{TelegramClient, TelegramClientConfig, TelegramError};
pub use types::{
    BotUser, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, SendMessageRequest,
    SentMessage,
};
pub use webhook::{CallbackQuery, Chat, Message, Update, parse_update};
