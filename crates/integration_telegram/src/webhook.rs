//! Telegram webhook update schema
//!
//! Only the fields the store bot reads are modelled; everything else in the
//! update is ignored during deserialization. An empty `message` or
//! `callback_query` object counts as absent.

use domain::{ChatId, InboundUpdate};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Incoming webhook update
#[derive(Debug, Default, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default, deserialize_with = "non_empty")]
    pub message: Option<Message>,
    #[serde(default, deserialize_with = "non_empty")]
    pub callback_query: Option<CallbackQuery>,
}

fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(fields) if !fields.is_empty() => serde_json::from_value(Value::Object(fields))
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: Option<i64>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    /// Message the pressed keyboard belongs to
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub data: Option<String>,
}

/// Parse a raw webhook body
///
/// An empty body is read as an empty update.
pub fn parse_update(body: &[u8]) -> Result<Update, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Update::default());
    }
    serde_json::from_slice(body)
}

impl Update {
    /// Classify into the domain union
    ///
    /// A message takes precedence over a callback query. Returns `None` when
    /// the update carries neither.
    pub fn into_inbound(self) -> Option<InboundUpdate> {
        if let Some(message) = self.message {
            return Some(InboundUpdate::TextMessage {
                chat_id: ChatId::new(message.chat.id),
                text: message.text.unwrap_or_default(),
            });
        }

        self.callback_query.map(|query| InboundUpdate::CallbackEvent {
            chat_id: query.message.map(|m| ChatId::new(m.chat.id)),
            callback_id: query.id,
            data: query.data.unwrap_or_default(),
        })
    }
}
