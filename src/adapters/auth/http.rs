//! Identity provider session validator over HTTP.
//!
//! Asks the provider's user endpoint who owns a session token:
//!
//! ```text
//! GET {url}/auth/v1/user
//! apikey: <public api key>
//! Authorization: Bearer <session token>
//! ```
//!
//! | Provider answer | Result |
//! |-----------------|--------|
//! | 200 + user body | `AuthenticatedUser` |
//! | 401 / 403 | `AuthError::InvalidToken` |
//! | anything else, timeout, network error | `AuthError::ServiceUnavailable` |

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Production implementation of `SessionValidator`.
pub struct HttpSessionValidator {
    endpoint: String,
    api_key: SecretString,
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl HttpSessionValidator {
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                AuthError::service_unavailable(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.user_endpoint(),
            api_key: config.api_key.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl SessionValidator for HttpSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let response = self
            .http_client
            .get(&self.endpoint)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Identity provider request failed");
                AuthError::service_unavailable(format!("Identity provider unreachable: {}", e))
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!("Identity provider rejected session token");
                return Err(AuthError::InvalidToken);
            }
            status => {
                tracing::error!(%status, "Identity provider returned unexpected status");
                return Err(AuthError::service_unavailable(format!(
                    "Identity provider returned {}",
                    status
                )));
            }
        }

        let user: ProviderUser = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse identity provider user");
            AuthError::service_unavailable(format!("Unreadable user response: {}", e))
        })?;

        let id = UserId::new(user.id).map_err(|_| {
            tracing::warn!("Identity provider returned a user without an id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(id, user.email.unwrap_or_default()))
    }
}
