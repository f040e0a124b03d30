//! RS256 playback token signer.
//!
//! The private key is parsed once when the signer is built. Secret stores
//! mangle multi-line PEM in different ways, so three encodings are accepted:
//!
//! - raw PEM
//! - PEM with literal `\n` escapes on one line
//! - base64 of a PEM document

use std::fmt;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::ExposeSecret;

use crate::config::SigningConfig;
use crate::domain::playback::PlaybackClaims;
use crate::ports::{PlaybackTokenSigner, SigningError};

const PEM_MARKER: &str = "-----BEGIN";

pub struct RsaPlaybackSigner {
    key_id: String,
    encoding_key: EncodingKey,
}

impl RsaPlaybackSigner {
    pub fn new(key_id: impl Into<String>, private_key: &str) -> Result<Self, SigningError> {
        let pem = normalize_pem(private_key)?;
        let encoding_key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| SigningError::InvalidKey(e.to_string()))?;

        Ok(Self {
            key_id: key_id.into(),
            encoding_key,
        })
    }

    pub fn from_config(config: &SigningConfig) -> Result<Self, SigningError> {
        Self::new(config.key_id.trim(), config.private_key.expose_secret())
    }
}

impl fmt::Debug for RsaPlaybackSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPlaybackSigner")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl PlaybackTokenSigner for RsaPlaybackSigner {
    fn key_id(&self) -> &str {
        &self.key_id
    }

    fn sign(&self, claims: &PlaybackClaims) -> Result<String, SigningError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.key_id.clone());

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| SigningError::Encoding(e.to_string()))
    }
}

/// Turns any accepted key encoding into a plain PEM document.
fn normalize_pem(raw: &str) -> Result<String, SigningError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SigningError::InvalidKey("private key is empty".to_string()));
    }

    if trimmed.contains(PEM_MARKER) {
        return Ok(trimmed.replace("\\n", "\n"));
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let decoded = B64
        .decode(compact)
        .map_err(|e| SigningError::InvalidKey(format!("not PEM and not base64: {}", e)))?;
    let text = String::from_utf8(decoded)
        .map_err(|_| SigningError::InvalidKey("base64 payload is not UTF-8".to_string()))?;

    if !text.contains(PEM_MARKER) {
        return Err(SigningError::InvalidKey(
            "base64 payload is not a PEM document".to_string(),
        ));
    }
    Ok(text.trim().replace("\\n", "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, VideoId};
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    const PRIVATE_PEM: &str = include_str!("../../../tests/fixtures/playback_signing_key.pem");
    const PUBLIC_PEM: &str = include_str!("../../../tests/fixtures/playback_signing_key.pub.pem");

    fn claims() -> PlaybackClaims {
        PlaybackClaims::new(&VideoId::new("vid-1").unwrap(), "kid-1", Timestamp::now())
    }

    fn verify(token: &str) -> PlaybackClaims {
        let key = DecodingKey::from_rsa_pem(PUBLIC_PEM.as_bytes()).unwrap();
        decode::<PlaybackClaims>(token, &key, &Validation::new(Algorithm::RS256))
            .unwrap()
            .claims
    }

    #[test]
    fn signs_verifiable_rs256_token_with_kid_header() {
        let signer = RsaPlaybackSigner::new("kid-1", PRIVATE_PEM).unwrap();

        let token = signer.sign(&claims()).unwrap();

        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some("kid-1"));
        let decoded = verify(&token);
        assert_eq!(decoded.sub, "vid-1");
        assert_eq!(decoded.exp - decoded.iat, 3600);
    }

    #[test]
    fn accepts_escaped_newline_pem() {
        let escaped = PRIVATE_PEM.trim().replace('\n', "\\n");

        let signer = RsaPlaybackSigner::new("kid-1", &escaped).unwrap();

        verify(&signer.sign(&claims()).unwrap());
    }

    #[test]
    fn accepts_base64_encoded_pem() {
        let encoded = B64.encode(PRIVATE_PEM);

        let signer = RsaPlaybackSigner::new("kid-1", &encoded).unwrap();

        verify(&signer.sign(&claims()).unwrap());
    }

    #[test]
    fn rejects_garbage_key() {
        assert!(matches!(
            RsaPlaybackSigner::new("kid-1", "not a key at all!"),
            Err(SigningError::InvalidKey(_))
        ));
        assert!(matches!(
            RsaPlaybackSigner::new("kid-1", &B64.encode("hello")),
            Err(SigningError::InvalidKey(_))
        ));
        assert!(matches!(
            RsaPlaybackSigner::new("kid-1", ""),
            Err(SigningError::InvalidKey(_))
        ));
    }

    #[test]
    fn from_config_uses_trimmed_key_id() {
        let config = SigningConfig::new(" kid-9 ", PRIVATE_PEM, "customer-abc");

        let signer = RsaPlaybackSigner::from_config(&config).unwrap();

        assert_eq!(signer.key_id(), "kid-9");
        assert!(!format!("{:?}", signer).contains("PRIVATE"));
    }
}
