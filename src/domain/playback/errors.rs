//! Playback token minting errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Unauthorized | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | BadRequest | 400 |
//! | Internal | 500 |

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MintError {
    /// Missing, invalid or unverifiable session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated, but entitlement says not paid.
    #[error("Payment required to watch this content")]
    Forbidden,

    /// Authenticated, but no entitlement record exists at all.
    #[error("Profile not found")]
    NotFound,

    /// Malformed request, e.g. empty video id.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Store, key or signing failure. The detail is for logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MintError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        MintError::BadRequest(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        MintError::Internal(reason.into())
    }

    /// Message returned to the caller; internal details are withheld.
    pub fn public_message(&self) -> String {
        match self {
            MintError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
