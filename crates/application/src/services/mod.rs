//! Application services - Use case implementations

mod webhook_dispatcher;

pub use webhook_dispatcher::{MISSING_CREDENTIAL_MESSAGE, WebhookDispatcher};
