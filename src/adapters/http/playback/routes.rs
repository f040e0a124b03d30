//! Axum router configuration for playback endpoints.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::mint_token;

/// # Routes
///
/// - `POST /token` - Mint a playback token (bearer session required)
pub fn playback_routes() -> Router<AppState> {
    Router::new().route("/token", post(mint_token))
}
