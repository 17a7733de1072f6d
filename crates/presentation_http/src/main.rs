//! UC store webhook server
//!
//! Main entry point for the HTTP server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::WebhookDispatcher;
use infrastructure::{AppConfig, TelegramMessengerAdapter, init_telemetry};
use presentation_http::{routes, shutdown::drain_deadline, state::AppState};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(&path)?,
        None => AppConfig::load()?,
    };

    // Initialize tracing
    init_telemetry(&config.telemetry)?;

    info!("🛒 UC store bot v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        telegram = ?config.telegram,
        "Configuration loaded"
    );

    // Initialize messenger
    let dispatcher = if config.telegram.is_configured() {
        let adapter = TelegramMessengerAdapter::from_config(&config.telegram)
            .map_err(|e| anyhow::anyhow!("Failed to initialize Telegram client: {e}"))?;
        WebhookDispatcher::new(Arc::new(adapter))
    } else {
        warn!("TELEGRAM_BOT_TOKEN is not set; updates will be acknowledged without replies");
        WebhookDispatcher::unconfigured()
    };

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let state = AppState::new(dispatcher, config);

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📨 Telegram webhook: http://{}{}", addr, routes::WEBHOOK_PATH);

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal(shutdown_timeout).await;
            // Fails only when the deadline is no longer awaited
            let _ = signalled_tx.send(());
        })
        .into_future();

    tokio::select! {
        result = server => {
            result?;
            info!("👋 Server shutdown complete");
        }
        () = drain_deadline(signalled_rx, shutdown_timeout) => {
            warn!(
                timeout_secs = shutdown_timeout.as_secs(),
                "Connections still open after shutdown timeout, exiting"
            );
        }
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
