//! MintPlaybackTokenHandler - Command handler issuing signed playback tokens.
//!
//! Checks run in a fixed order so that an unauthenticated caller learns
//! nothing about entitlements or request shape:
//!
//! | Step | Failure | Error |
//! |------|---------|-------|
//! | Session token | missing, invalid, provider down | `Unauthorized` |
//! | Entitlement | no record | `NotFound` |
//! | Entitlement | `has_paid = false` | `Forbidden` |
//! | Entitlement | store error | `Internal` |
//! | Video id | empty or blank | `BadRequest` |
//! | Signing | key or encoding failure | `Internal` |
//!
//! Entitlement is read from the store on every call.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, Timestamp, VideoId};
use crate::domain::playback::{MintError, PlaybackClaims, PLAYBACK_TOKEN_TTL_SECS};
use crate::ports::{EntitlementStore, PlaybackTokenSigner, SessionValidator};

#[derive(Debug, Clone)]
pub struct MintPlaybackTokenCommand {
    pub bearer_token: Option<String>,
    /// Raw id from the request body; validated after authorization.
    pub video_id: String,
}

#[derive(Debug, Clone)]
pub struct MintPlaybackTokenResult {
    pub token: String,
    pub video_id: VideoId,
    pub customer_subdomain: String,
    pub expires_in: u64,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

#[derive(Clone)]
pub struct MintPlaybackTokenHandler {
    session_validator: Arc<dyn SessionValidator>,
    store: Arc<dyn EntitlementStore>,
    signer: Arc<dyn PlaybackTokenSigner>,
    customer_subdomain: String,
}

impl MintPlaybackTokenHandler {
    pub fn new(
        session_validator: Arc<dyn SessionValidator>,
        store: Arc<dyn EntitlementStore>,
        signer: Arc<dyn PlaybackTokenSigner>,
        customer_subdomain: impl Into<String>,
    ) -> Self {
        Self {
            session_validator,
            store,
            signer,
            customer_subdomain: customer_subdomain.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: MintPlaybackTokenCommand,
    ) -> Result<MintPlaybackTokenResult, MintError> {
        // 1. Identity
        let token = cmd
            .bearer_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MintError::Unauthorized)?;

        let viewer = self
            .session_validator
            .validate(token)
            .await
            .map_err(|e| {
                match &e {
                    AuthError::ServiceUnavailable(reason) => {
                        tracing::error!(%reason, "Identity provider unavailable during mint")
                    }
                    other => tracing::debug!(error = %other, "Mint rejected: invalid session"),
                }
                MintError::Unauthorized
            })?;

        // 2. Entitlement, straight from the store
        let entitlement = self
            .store
            .get_entitlement(&viewer.id)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %viewer.id, error = %e, "Entitlement lookup failed during mint");
                MintError::internal(e.to_string())
            })?
            .ok_or_else(|| {
                tracing::debug!(user_id = %viewer.id, "Mint rejected: no entitlement record");
                MintError::NotFound
            })?;

        if !entitlement.grants_access() {
            tracing::debug!(user_id = %viewer.id, "Mint rejected: not paid");
            return Err(MintError::Forbidden);
        }

        // 3. Request shape. The token subject is the id exactly as sent.
        if cmd.video_id.trim() != cmd.video_id {
            return Err(MintError::bad_request(
                "videoId must not have leading or trailing whitespace",
            ));
        }
        let video_id = VideoId::new(cmd.video_id)
            .map_err(|_| MintError::bad_request("videoId is required"))?;

        // 4-5. Claims and signature
        let issued_at = Timestamp::now();
        let claims = PlaybackClaims::new(&video_id, self.signer.key_id(), issued_at);
        let token = self.signer.sign(&claims).map_err(|e| {
            tracing::error!(video_id = %video_id, error = %e, "Playback token signing failed");
            MintError::internal(e.to_string())
        })?;

        tracing::info!(user_id = %viewer.id, video_id = %video_id, "Playback token minted");

        Ok(MintPlaybackTokenResult {
            token,
            video_id,
            customer_subdomain: self.customer_subdomain.clone(),
            expires_in: PLAYBACK_TOKEN_TTL_SECS,
            issued_at,
            expires_at: issued_at.plus_secs(PLAYBACK_TOKEN_TTL_SECS),
        })
    }
}
