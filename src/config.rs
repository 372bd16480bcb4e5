//! Configuration loading and constants.
//!
//! Resolves application configuration from the process environment, with an
//! optional best-effort `.env` file load for local development. Defines
//! constants for HTTP cache headers, environment variable names, and default
//! paths. `AppConfig` is the root configuration struct containing all settings.

use std::path::PathBuf;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (Varnish,
// nginx, CDNs) and browsers.

/// Secret responses - must never be stored by any cache
pub const CACHE_CONTROL_SECRET: &str = "no-store";

/// Health check responses - always revalidated so probes stay fresh
pub const CACHE_CONTROL_HEALTH: &str = "no-cache";

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable holding the secret value
pub const ENV_SECRET: &str = "SEGREDO";

/// Environment variable overriding the listen host
pub const ENV_HOST: &str = "FORTRESS_HOST";

/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "FORTRESS_PORT";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Placeholder exposed when no secret is configured
pub const SECRET_SENTINEL: &str = "SEGREDO_NAO_CONFIGURADO";

/// Default listen host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "fortress=debug,tower_http=debug";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// The secret value resolved at startup
    pub secret: SecretConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// The secret value and its provenance.
///
/// Resolved once at startup and immutable for the process lifetime; a restart
/// is the only way to pick up a changed environment.
#[derive(Debug, Clone)]
pub struct SecretConfig {
    /// The value served by `/segredo` (real secret or sentinel)
    pub value: String,
    /// Whether the value came from the environment rather than the sentinel
    pub configured: bool,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    ///
    /// `SEGREDO` supplies the secret value, falling back to the sentinel when
    /// unset or empty. `FORTRESS_HOST` and `FORTRESS_PORT` override the listen
    /// address; a malformed port is a hard error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpServerConfig {
                host: std::env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: resolve_port(std::env::var(ENV_PORT).ok())?,
            },
            secret: resolve_secret(std::env::var(ENV_SECRET).ok()),
        })
    }
}

/// Best-effort load of a local environment file.
///
/// Supports local development only; in production the environment is injected
/// externally and no file is present. Returns the loaded path on success;
/// a missing or malformed file is deliberately ignored.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Resolve the secret value from its raw environment reading.
///
/// An unset or empty variable degrades to the sentinel rather than failing:
/// a misconfigured service still starts and signals the misconfiguration
/// through the value it serves.
fn resolve_secret(raw: Option<String>) -> SecretConfig {
    match raw {
        Some(value) if !value.is_empty() => SecretConfig {
            value,
            configured: true,
        },
        _ => SecretConfig {
            value: SECRET_SENTINEL.to_string(),
            configured: false,
        },
    }
}

/// Parse the listen port from its raw environment reading (default: 3000).
fn resolve_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(port) => port.parse().map_err(ConfigError::InvalidPort),
        None => Ok(DEFAULT_PORT),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid listen port: {0}")]
    InvalidPort(std::num::ParseIntError),
}
