//! Session validation port.
//!
//! Resolves an opaque bearer session token into the viewer's identity. The
//! identity provider is the only authority on whether a token is valid; no
//! local JWT verification is attempted.
//!
//! # Example Implementation
//!
//! ```ignore
//! pub struct HttpSessionValidator { ... }
//!
//! #[async_trait]
//! impl SessionValidator for HttpSessionValidator {
//!     async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
//!         // 1. GET the provider's user endpoint with the token
//!         // 2. 401/403 -> InvalidToken, other failures -> ServiceUnavailable
//!         // 3. Map the user body to AuthenticatedUser
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` when the provider rejects the token
/// - Return `AuthError::ServiceUnavailable` when the provider cannot answer
/// - Never panic on malformed input
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a session token and return the authenticated user.
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
