//! HTTP server module.
//!
//! Plain-HTTP serving only; TLS termination is left to a reverse proxy.
//! The server includes graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
