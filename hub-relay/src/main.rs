//! HubRelay server - receives forward actions and relays them.
//!
//! Every action posted by the hub is logged through the local listener, then
//! re-posted to each URL in `FORWARD_CHAIN` from a background pool.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hubrelay::{router, AppState, Config, ForwardPool, LogListener};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(
        port = config.port,
        path = %config.forward_actions_path,
        forward_chain = ?config.forward_chain,
        concurrency = config.worker_concurrency,
        timeout_ms = ?config.forward_timeout_ms,
        "relay_config_loaded"
    );

    serve(config).await?;

    info!("relay_stopped");
    Ok(())
}

/// JSON logs, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();
}

/// Bind the listener and serve until SIGINT or SIGTERM.
async fn serve(config: Config) -> Result<()> {
    let pool = ForwardPool::from_config(&config).context("Failed to create HTTP client")?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = router(AppState::new(config, Arc::new(LogListener), pool));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!(address = %addr, "relay_listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_requested())
        .await
        .context("Server error")
}

/// Resolves on the first SIGINT, or SIGTERM on unix.
async fn shutdown_requested() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!(signal = "SIGINT", "relay_shutting_down"),
                    _ = sigterm.recv() => info!(signal = "SIGTERM", "relay_shutting_down"),
                }
                return;
            }
            Err(e) => tracing::warn!(error = %e, "sigterm_handler_unavailable"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "sigint_handler_unavailable");
        return;
    }
    info!(signal = "SIGINT", "relay_shutting_down");
}
