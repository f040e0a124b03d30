//! Identity provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where session tokens are verified.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the identity provider, e.g. `https://xyz.supabase.co`
    pub url: String,

    /// Public API key sent in the `apikey` header
    pub api_key: SecretString,

    /// Timeout for one user lookup, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AuthConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: SecretString::new(api_key.into()),
            timeout_secs: default_timeout(),
        }
    }

    /// Endpoint returning the user behind a bearer session token.
    pub fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// In production the identity provider must be reached over HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__URL"));
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_KEY"));
        }
        if environment.is_production() && !self.url.starts_with("https://") {
            return Err(ValidationError::IdentityUrlMustBeHttps);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    5
}
