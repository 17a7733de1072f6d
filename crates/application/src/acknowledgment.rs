//! Synchronous webhook acknowledgment
//!
//! Telegram only looks at the status code; the body is diagnostic. Every
//! handled delivery gets `ok: true` so the platform never retries it.

use serde::{Deserialize, Serialize};

/// Body returned to the messaging platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub ok: bool,
    /// Informational note, e.g. a missing credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Description of a failure that was swallowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Acknowledgment {
    /// Bare `{"ok": true}`
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            ok: true,
            message: None,
            error: None,
        }
    }

    /// `{"ok": true, "message": ...}`
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok()
        }
    }

    /// `{"ok": true, "error": ...}`; the status stays a success
    #[must_use]
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::ok()
        }
    }
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_ack_serializes_without_optional_fields() {
        let value = serde_json::to_value(Acknowledgment::ok()).unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn message_ack_serialization() {
        let value = serde_json::to_value(Acknowledgment::with_message("Bot token not configured"))
            .unwrap();
        assert_eq!(value, json!({"ok": true, "message": "Bot token not configured"}));
    }

    #[test]
    fn error_ack_still_reports_ok() {
        let ack = Acknowledgment::with_error("expected value at line 1 column 1");
        assert!(ack.ok);
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["error"], "expected value at line 1 column 1");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn deserializes_minimal_body() {
        let ack: Acknowledgment = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(ack, Acknowledgment::default());
    }
}
