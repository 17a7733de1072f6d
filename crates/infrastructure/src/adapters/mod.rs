//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod telegram_adapter;

pub use telegram_adapter::TelegramMessengerAdapter;
