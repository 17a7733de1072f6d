//! Chat identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the chat a screen is delivered to
///
/// Telegram chat ids are signed 64-bit integers: private chats are positive,
/// groups and channels negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Wrap a raw chat id
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_raw_id() {
        assert_eq!(ChatId::new(42).to_string(), "42");
        assert_eq!(ChatId::new(-1_001_234).to_string(), "-1001234");
    }

    #[test]
    fn from_i64_round_trips_value() {
        let id: ChatId = 987_654_321.into();
        assert_eq!(id.as_i64(), 987_654_321);
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ChatId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: ChatId = serde_json::from_str("-15").unwrap();
        assert_eq!(parsed, ChatId::new(-15));
    }
}
