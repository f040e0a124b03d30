//! Playback token signing port.
//!
//! The signer owns the private key and its registered key id. Keys are loaded
//! once at startup; a signer that exists is ready to sign.

use thiserror::Error;

use crate::domain::playback::PlaybackClaims;

pub trait PlaybackTokenSigner: Send + Sync {
    /// Key id placed in the token header and the `kid` claim.
    fn key_id(&self) -> &str;

    /// Sign the claims and return the compact JWT.
    fn sign(&self, claims: &PlaybackClaims) -> Result<String, SigningError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The configured key material could not be decoded or parsed.
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    /// The key parsed but signing failed.
    #[error("Token encoding failed: {0}")]
    Encoding(String),
}
