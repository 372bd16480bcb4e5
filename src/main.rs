//! Fortress: a configuration-backed secret reader service.
//!
//! This is the application entry point. It initializes tracing, performs a
//! best-effort `.env` load for local development, resolves configuration from
//! the process environment, sets up the Axum router with all routes, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortress::config::{self, AppConfig, DEFAULT_LOG_FILTER};
use fortress::http::start_server;
use fortress::routes::create_router;
use fortress::state::AppState;

/// Fortress: serves a configuration-backed secret over HTTP
#[derive(Parser, Debug)]
#[command(name = "fortress", version, about)]
struct Args {
    /// Listen host (overrides FORTRESS_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides FORTRESS_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "fortress=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Best-effort .env load for local development; absence is not an error
    if let Some(path) = config::load_env_file() {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    // Resolve configuration with priority: CLI > env > default
    let mut config = AppConfig::from_env()?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // The secret value itself is never logged, only its provenance
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        secret_configured = config.secret.configured,
        "Loaded configuration"
    );

    // Create application state
    let state = AppState::new(config.clone());

    // Create router
    let app = create_router(state);

    // Start server; a bind failure is fatal with no retry
    if let Err(err) = start_server(app, &config).await {
        tracing::error!(error = %err, "HTTP server failed");
        std::process::exit(1);
    }

    Ok(())
}
