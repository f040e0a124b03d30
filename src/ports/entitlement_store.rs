//! Entitlement store port.
//!
//! One record per user holding the `has_paid` flag. Reads are keyed by the
//! identity provider's user id; writes are upserts.
//!
//! # Monotonic writes
//!
//! Implementations must never flip `has_paid` from `true` back to `false`.
//! A concurrent or repeated upsert with `true` is idempotent.

use async_trait::async_trait;

use crate::domain::entitlement::Entitlement;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// Read the entitlement for a user.
    ///
    /// Returns `Ok(None)` when no record exists. Store failures are
    /// reported as `DatabaseError`.
    async fn get_entitlement(&self, user_id: &UserId) -> Result<Option<Entitlement>, DomainError>;

    /// Insert or update the record for `user_id` and return what is stored.
    ///
    /// The stored flag is the OR of the existing flag and `has_paid`.
    async fn upsert_entitlement(
        &self,
        user_id: &UserId,
        has_paid: bool,
    ) -> Result<Entitlement, DomainError>;
}
