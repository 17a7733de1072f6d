//! Inline keyboard value objects
//!
//! A keyboard is a grid of buttons rendered under a message. Each button either
//! triggers a callback back into this bot or opens an external link.

use serde::{Deserialize, Serialize};

/// What pressing a button does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Sends the tag back to the bot as callback data
    Callback(String),
    /// Opens an external URL
    Url(String),
}

/// A single keyboard button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Label shown to the user
    pub text: String,
    /// Action on press
    pub action: ButtonAction,
}

impl Button {
    /// Create a button that sends `data` back as a callback
    #[must_use]
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    /// Create a button that opens `url`
    #[must_use]
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    /// Callback tag, if this is a callback button
    #[must_use]
    pub fn callback_data(&self) -> Option<&str> {
        match &self.action {
            ButtonAction::Callback(data) => Some(data),
            ButtonAction::Url(_) => None,
        }
    }

    /// Link target, if this is a URL button
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match &self.action {
            ButtonAction::Url(url) => Some(url),
            ButtonAction::Callback(_) => None,
        }
    }
}

/// Rows of buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    rows: Vec<Vec<Button>>,
}

impl InlineKeyboard {
    /// Create a keyboard from explicit rows
    #[must_use]
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// One button per row, in order
    #[must_use]
    pub fn single_column(buttons: impl IntoIterator<Item = Button>) -> Self {
        Self {
            rows: buttons.into_iter().map(|button| vec![button]).collect(),
        }
    }

    /// The button rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All buttons, row by row
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}
