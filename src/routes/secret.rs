//! Secret value endpoint.
//!
//! Serves the secret resolved at startup as a JSON object. The value is fixed
//! for the process lifetime; a restart is required to pick up a changed
//! environment. When no secret is configured the sentinel placeholder is
//! served verbatim, signaling the misconfiguration to callers.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Response body for the secret endpoint.
#[derive(Debug, Serialize)]
pub struct SecretResponse {
    pub segredo: String,
}

/// Secret value handler.
#[instrument(name = "secret::show", skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<SecretResponse> {
    Json(SecretResponse {
        segredo: state.config.secret.value.clone(),
    })
}
