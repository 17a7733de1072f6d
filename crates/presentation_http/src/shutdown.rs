//! Graceful shutdown deadline

use std::time::Duration;

use tokio::sync::oneshot;

/// Resolve `timeout` after the shutdown signal arrives
///
/// Never resolves if the signal sender is dropped without sending, so a
/// server that stops on its own is not cut short.
pub async fn drain_deadline(signalled: oneshot::Receiver<()>, timeout: Duration) {
    if signalled.await.is_ok() {
        tokio::time::sleep(timeout).await;
    } else {
        std::future::pending::<()>().await;
    }
}
