//! Routing of inbound text and callback data to screens

use crate::screens::Screen;

/// Callback tags and chat commands understood by the bot
pub mod actions {
    /// Chat command that opens the welcome screen
    pub const START_COMMAND: &str = "/start";
    /// Chat command that opens the package list
    pub const BUY_COMMAND: &str = "/buy";

    /// Callback tag: show the package list
    pub const BUY: &str = "buy";
    /// Callback tag: show support contacts
    pub const SUPPORT: &str = "support";
    /// Callback tag of the "main menu" button
    pub const START: &str = "start";
    /// Prefix of bundle selection tags (`pkg_<id>`)
    pub const BUNDLE_PREFIX: &str = "pkg_";
}

/// Screen requested by a plain text message
///
/// Commands are matched by prefix, so `/start@store_bot` and `/buy 660` are
/// recognized too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    Buy,
    /// Anything that is not a known command
    Other,
}

impl MenuCommand {
    /// Classify message text
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.starts_with(actions::START_COMMAND) {
            Self::Start
        } else if text.starts_with(actions::BUY_COMMAND) {
            Self::Buy
        } else {
            Self::Other
        }
    }

    /// Screen shown in reply
    #[must_use]
    pub const fn screen(self) -> Screen {
        match self {
            Self::Start => Screen::Welcome,
            Self::Buy => Screen::PackageList,
            Self::Other => Screen::Help,
        }
    }
}

/// What a button press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction<'a> {
    ShowPackages,
    /// Bundle selection; the identifier is not validated yet
    ShowBundle(&'a str),
    ShowSupport,
    /// Unrecognized data, including the `start` tag
    Ignored,
}

impl<'a> CallbackAction<'a> {
    /// Classify callback data
    #[must_use]
    pub fn parse(data: &'a str) -> Self {
        if data == actions::BUY {
            Self::ShowPackages
        } else if let Some(id) = data.strip_prefix(actions::BUNDLE_PREFIX) {
            Self::ShowBundle(id)
        } else if data == actions::SUPPORT {
            Self::ShowSupport
        } else {
            Self::Ignored
        }
    }
}
