//! Webhook dispatcher
//!
//! Maps one classified inbound update to the screen it asks for and sends that
//! screen through the messenger port. The conversation has no state: every
//! reply depends only on the update itself and the static catalog.
//!
//! Outbound calls are fire-and-forget. Each call is awaited so that the
//! webhook reply is sent after the screen, but its outcome is only logged.
//! There is no retry and no delivery guarantee.

use std::{future::Future, sync::Arc};

use domain::{CallbackAction, ChatId, InboundUpdate, MenuCommand, Screen};
use tracing::{debug, info, instrument, warn};

use crate::acknowledgment::Acknowledgment;
use crate::error::ApplicationError;
use crate::ports::{MessengerPort, OutgoingMessage};

/// Diagnostic returned when no bot credential is configured
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Bot token not configured";

/// Routes inbound updates to static screens
pub struct WebhookDispatcher {
    /// `None` when the bot credential is missing
    messenger: Option<Arc<dyn MessengerPort>>,
}

impl std::fmt::Debug for WebhookDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookDispatcher")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl WebhookDispatcher {
    /// Create a dispatcher that replies through `messenger`
    #[must_use]
    pub fn new(messenger: Arc<dyn MessengerPort>) -> Self {
        Self {
            messenger: Some(messenger),
        }
    }

    /// Create a dispatcher without a credential
    ///
    /// Every update is acknowledged with a diagnostic and nothing is sent.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { messenger: None }
    }

    /// Whether a messenger is attached
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.messenger.is_some()
    }

    /// The attached messenger, if any
    #[must_use]
    pub fn messenger(&self) -> Option<&Arc<dyn MessengerPort>> {
        self.messenger.as_ref()
    }

    /// Handle one update and produce the acknowledgment
    ///
    /// `None` stands for an update shape the bot does not react to.
    #[instrument(skip_all, fields(kind = update.as_ref().map_or("unrecognized", InboundUpdate::kind)))]
    pub async fn dispatch(&self, update: Option<InboundUpdate>) -> Acknowledgment {
        let Some(messenger) = self.messenger.as_deref() else {
            warn!("Webhook update received but bot token is not configured");
            return Acknowledgment::with_message(MISSING_CREDENTIAL_MESSAGE);
        };

        match update {
            Some(InboundUpdate::TextMessage { chat_id, text }) => {
                handle_message(messenger, chat_id, &text).await;
            },
            Some(InboundUpdate::CallbackEvent {
                chat_id,
                callback_id,
                data,
            }) => {
                handle_callback(messenger, chat_id, &callback_id, &data).await;
            },
            None => debug!("Ignoring update without message or callback query"),
        }

        Acknowledgment::ok()
    }
}

async fn handle_message(messenger: &dyn MessengerPort, chat_id: ChatId, text: &str) {
    let command = MenuCommand::parse(text);
    debug!(chat_id = %chat_id, ?command, "Handling text message");
    show(messenger, chat_id, command.screen()).await;
}

async fn handle_callback(
    messenger: &dyn MessengerPort,
    chat_id: Option<ChatId>,
    callback_id: &str,
    data: &str,
) {
    // Answered exactly once, whatever the data turns out to be.
    deliver("answer_callback", messenger.answer_callback(callback_id)).await;

    let screen = match CallbackAction::parse(data) {
        CallbackAction::ShowPackages => Screen::PackageList,
        CallbackAction::ShowSupport => Screen::SupportInfo,
        CallbackAction::ShowBundle(id) => match Screen::payment_detail(id) {
            Ok(screen) => screen,
            Err(e) => {
                debug!(error = %e, "Ignoring selection of unknown bundle");
                return;
            },
        },
        CallbackAction::Ignored => {
            debug!(data = %data, "Ignoring unrecognized callback data");
            return;
        },
    };

    let Some(chat_id) = chat_id else {
        debug!(screen = screen.name(), "Callback has no originating chat; nothing to render");
        return;
    };

    show(messenger, chat_id, screen).await;
}

async fn show(messenger: &dyn MessengerPort, chat_id: ChatId, screen: Screen) {
    info!(chat_id = %chat_id, screen = screen.name(), "Rendering screen");
    let message = OutgoingMessage::from_screen(chat_id, &screen);
    deliver("send_message", messenger.send_message(message)).await;
}

/// Await an outbound call and drop its outcome
async fn deliver<F>(operation: &'static str, call: F)
where
    F: Future<Output = Result<(), ApplicationError>>,
{
    if let Err(e) = call.await {
        warn!(operation, error = %e, "Outbound call failed; not retrying");
    }
}
