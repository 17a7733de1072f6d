//! Value Objects - Immutable, identity-less domain primitives

mod chat_id;
mod keyboard;

pub use chat_id::ChatId;
pub use keyboard::{Button, ButtonAction, InlineKeyboard};
