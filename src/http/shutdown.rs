//! Graceful shutdown and signal handling.
//!
//! Handles SIGTERM/SIGINT: stop accepting new connections, wait for existing
//! connections to complete, then shut down.

/// Resolves when a shutdown signal (Ctrl+C or SIGTERM) is received.
///
/// Passed to `axum::serve(...).with_graceful_shutdown` so the server drains
/// in-flight requests before exiting.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
