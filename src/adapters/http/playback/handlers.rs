//! HTTP handlers for playback token endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::MintPlaybackTokenCommand;
use crate::domain::playback::MintError;

use super::super::extract::BearerToken;
use super::super::state::AppState;
use super::dto::{ErrorResponse, MintTokenRequest, MintTokenResponse};

/// POST /api/playback/token - Mint a signed playback token for one video
///
/// An unreadable body is treated as an empty `videoId`, so the caller still
/// gets 401/403/404 before 400.
pub async fn mint_token(
    State(state): State<AppState>,
    BearerToken(bearer_token): BearerToken,
    body: Result<Json<MintTokenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PlaybackApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable mint request body");
            MintTokenRequest::default()
        }
    };

    let handler = state.mint_playback_token_handler();
    let cmd = MintPlaybackTokenCommand {
        bearer_token,
        video_id: request.video_id,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(MintTokenResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for playback token errors.
#[derive(Debug)]
pub struct PlaybackApiError(pub MintError);

impl From<MintError> for PlaybackApiError {
    fn from(err: MintError) -> Self {
        PlaybackApiError(err)
    }
}

impl IntoResponse for PlaybackApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MintError::Unauthorized => StatusCode::UNAUTHORIZED,
            MintError::Forbidden => StatusCode::FORBIDDEN,
            MintError::NotFound => StatusCode::NOT_FOUND,
            MintError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MintError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.0.public_message()))).into_response()
    }
}
