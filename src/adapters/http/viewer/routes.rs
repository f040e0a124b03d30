//! Axum router configuration for viewer endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::get_viewer_state;

/// # Routes
///
/// - `GET /state` - Viewer entitlement state (bearer session optional)
pub fn viewer_routes() -> Router<AppState> {
    Router::new().route("/state", get(get_viewer_state))
}
