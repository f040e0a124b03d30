//! Claims carried by a signed playback token.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, VideoId};

/// Lifetime of every playback token, in seconds.
pub const PLAYBACK_TOKEN_TTL_SECS: u64 = 3600;

/// JWT body understood by the content delivery layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackClaims {
    /// Video the token unlocks.
    pub sub: String,
    /// Signing key id registered with the delivery layer.
    pub kid: String,
    /// Issued at (Unix seconds).
    pub iat: i64,
    /// Expiry (Unix seconds), always `iat + PLAYBACK_TOKEN_TTL_SECS`.
    pub exp: i64,
}

impl PlaybackClaims {
    pub fn new(video_id: &VideoId, key_id: impl Into<String>, issued_at: Timestamp) -> Self {
        let expires_at = issued_at.plus_secs(PLAYBACK_TOKEN_TTL_SECS);
        Self {
            sub: video_id.as_str().to_string(),
            kid: key_id.into(),
            iat: issued_at.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        }
    }
}
