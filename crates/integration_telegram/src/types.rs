//! Bot API request and response bodies

use domain::{Button, ButtonAction, InlineKeyboard};
use serde::{Deserialize, Serialize};

/// Message formatting mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[default]
    #[serde(rename = "HTML")]
    Html,
}

/// `sendMessage` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: ParseMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessageRequest {
    /// HTML message without a keyboard
    pub fn html(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: ParseMode::Html,
            reply_markup: None,
        }
    }

    /// Attach an inline keyboard
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: impl Into<InlineKeyboardMarkup>) -> Self {
        self.reply_markup = Some(keyboard.into());
        self
    }
}

/// `answerCallbackQuery` request body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AnswerCallbackQueryRequest<'a> {
    pub callback_query_id: &'a str,
}

/// Inline keyboard attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// One inline keyboard button; exactly one of `callback_data` and `url` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&Button> for InlineKeyboardButton {
    fn from(button: &Button) -> Self {
        let (callback_data, url) = match &button.action {
            ButtonAction::Callback(data) => (Some(data.clone()), None),
            ButtonAction::Url(url) => (None, Some(url.clone())),
        };
        Self {
            text: button.text.clone(),
            callback_data,
            url,
        }
    }
}

impl From<&InlineKeyboard> for InlineKeyboardMarkup {
    fn from(keyboard: &InlineKeyboard) -> Self {
        Self {
            inline_keyboard: keyboard
                .rows()
                .iter()
                .map(|row| row.iter().map(InlineKeyboardButton::from).collect())
                .collect(),
        }
    }
}

impl From<InlineKeyboard> for InlineKeyboardMarkup {
    fn from(keyboard: InlineKeyboard) -> Self {
        Self::from(&keyboard)
    }
}

/// Envelope every Bot API method replies with
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i32>,
}

/// Result of `sendMessage`; only the identifier is kept
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

/// Result of `getMe`
#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Screen;
    use serde_json::json;

    #[test]
    fn parse_mode_serializes_as_html() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
    }

    #[test]
    fn request_without_keyboard_omits_reply_markup() {
        let request = SendMessageRequest::html(5, "<b>hi</b>");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"chat_id": 5, "text": "<b>hi</b>", "parse_mode": "HTML"})
        );
    }

    #[test]
    fn callback_button_serializes_without_url() {
        let button = InlineKeyboardButton::from(&Button::callback("🛒 Купить UC", "buy"));
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({"text": "🛒 Купить UC", "callback_data": "buy"})
        );
    }

    #[test]
    fn url_button_serializes_without_callback_data() {
        let button = InlineKeyboardButton::from(&Button::url("go", "https://t.me/x"));
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({"text": "go", "url": "https://t.me/x"})
        );
    }

    #[test]
    fn keyboard_keeps_row_layout() {
        let keyboard = InlineKeyboard::new(vec![
            vec![Button::callback("a", "1"), Button::callback("b", "2")],
            vec![Button::url("c", "https://example.com")],
        ]);
        let markup = InlineKeyboardMarkup::from(&keyboard);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1][0].url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn package_list_markup_has_bundle_tags() {
        let content = Screen::PackageList.render();
        let markup = InlineKeyboardMarkup::from(content.keyboard);
        let tags: Vec<_> = markup
            .inline_keyboard
            .iter()
            .filter_map(|row| row[0].callback_data.clone())
            .collect();
        assert_eq!(tags, ["pkg_1", "pkg_2", "pkg_3", "pkg_4", "pkg_5", "pkg_6"]);
    }

    #[test]
    fn error_envelope_deserializes() {
        let response: ApiResponse<SentMessage> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        }))
        .unwrap();
        assert!(!response.ok);
        assert!(response.result.is_none());
        assert_eq!(response.error_code, Some(400));
    }

    #[test]
    fn answer_callback_result_is_bool() {
        let response: ApiResponse<bool> =
            serde_json::from_value(json!({"ok": true, "result": true})).unwrap();
        assert_eq!(response.result, Some(true));
    }
}
