//! Playback token signing configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Key material and identifiers registered with the content delivery layer.
#[derive(Debug, Clone, Deserialize)]
pub struct SigningConfig {
    /// Key id registered with the delivery layer; becomes the `kid`
    pub key_id: String,

    /// RSA private key: PEM, PEM with literal `\n` escapes, or base64 of a PEM
    pub private_key: SecretString,

    /// Delivery-layer customer subdomain returned alongside each token
    pub customer_subdomain: String,
}

impl SigningConfig {
    pub fn new(
        key_id: impl Into<String>,
        private_key: impl Into<String>,
        customer_subdomain: impl Into<String>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            private_key: SecretString::new(private_key.into()),
            customer_subdomain: customer_subdomain.into(),
        }
    }

    /// Presence checks only; the key itself is parsed when the signer is built.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SIGNING__KEY_ID"));
        }
        if self.private_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("SIGNING__PRIVATE_KEY"));
        }
        let subdomain = self.customer_subdomain.trim();
        if subdomain.is_empty() {
            return Err(ValidationError::MissingRequired("SIGNING__CUSTOMER_SUBDOMAIN"));
        }
        if !subdomain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(ValidationError::InvalidCustomerSubdomain(
                self.customer_subdomain.clone(),
            ));
        }
        Ok(())
    }
}
