//! Mock session validator for tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use playback_gate::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("session-1", UserId::new("user-123")?);
//! let viewer = validator.validate("session-1").await?;
//! assert_eq!(viewer.id.as_str(), "user-123");
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every validation when set.
    force_error: RwLock<Option<AuthError>>,
    calls: AtomicUsize,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.get_mut().insert(token.into(), user);
        self
    }

    /// Adds a valid token for a user with a derived test email.
    pub fn with_test_user(self, token: impl Into<String>, user_id: UserId) -> Self {
        let email = format!("{}@test.example.com", user_id);
        self.with_user(token, AuthenticatedUser::new(user_id, email))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    /// Removes a token, making it invalid.
    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }

    /// Number of `validate` calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.force_error.read().await.clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
