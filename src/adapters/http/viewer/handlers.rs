//! HTTP handlers for viewer endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::ResolveViewerStateQuery;

use super::super::extract::BearerToken;
use super::super::state::AppState;
use super::dto::ViewerStateResponse;

/// GET /api/viewer/state - Evaluate the caller's entitlement
///
/// Always 200; failures are already folded into the state.
pub async fn get_viewer_state(
    State(state): State<AppState>,
    BearerToken(bearer_token): BearerToken,
) -> impl IntoResponse {
    let handler = state.resolve_viewer_state_handler();
    let evaluation = handler.handle(ResolveViewerStateQuery { bearer_token }).await;

    Json(ViewerStateResponse::from(&evaluation))
}
