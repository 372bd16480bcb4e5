//! Fortress: a configuration-backed secret reader service.
//!
//! Resolves a single secret value from the process environment at startup
//! and serves it over a small HTTP surface: a health check at `/health`
//! and the secret itself as JSON at `/segredo`.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;
