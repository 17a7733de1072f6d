//! Inbound update union

use crate::value_objects::ChatId;

/// A webhook update the bot knows how to react to
///
/// Any other update shape (edited messages, inline queries, channel posts...)
/// is not representable and is acknowledged without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundUpdate {
    /// A message sent to the bot; `text` is empty for non-text messages
    TextMessage { chat_id: ChatId, text: String },
    /// An inline keyboard button press
    CallbackEvent {
        /// Chat of the message carrying the keyboard, absent for inline-mode messages
        chat_id: Option<ChatId>,
        callback_id: String,
        data: String,
    },
}

impl InboundUpdate {
    /// Chat that screens for this update go to, if known
    #[must_use]
    pub const fn chat_id(&self) -> Option<ChatId> {
        match self {
            Self::TextMessage { chat_id, .. } => Some(*chat_id),
            Self::CallbackEvent { chat_id, .. } => *chat_id,
        }
    }

    /// Short name for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TextMessage { .. } => "message",
            Self::CallbackEvent { .. } => "callback_query",
        }
    }
}
