//! Entitlement record - durable proof that a user paid for premium access.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// One row per user. Never deleted; `has_paid` never goes back to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub user_id: UserId,
    pub has_paid: bool,
    pub updated_at: Timestamp,
}

impl Entitlement {
    /// Creates the first record for a user.
    pub fn new(user_id: UserId, has_paid: bool, updated_at: Timestamp) -> Self {
        Self {
            user_id,
            has_paid,
            updated_at,
        }
    }

    /// Applies an upsert to an existing record.
    ///
    /// The flag is OR-ed so that concurrent or replayed upserts commute and a
    /// later `false` can never revoke a recorded payment.
    pub fn merge(&self, has_paid: bool, updated_at: Timestamp) -> Self {
        Self {
            user_id: self.user_id.clone(),
            has_paid: self.has_paid || has_paid,
            updated_at,
        }
    }

    /// Whether this record unlocks premium content.
    pub fn grants_access(&self) -> bool {
        self.has_paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn new_record_reflects_flag() {
        let e = Entitlement::new(user(), false, Timestamp::now());
        assert!(!e.grants_access());
        let e = Entitlement::new(user(), true, Timestamp::now());
        assert!(e.grants_access());
    }

    #[test]
    fn merge_true_grants_access() {
        let e = Entitlement::new(user(), false, Timestamp::now()).merge(true, Timestamp::now());
        assert!(e.has_paid);
    }

    #[test]
    fn merge_false_never_revokes() {
        let e = Entitlement::new(user(), true, Timestamp::now()).merge(false, Timestamp::now());
        assert!(e.has_paid);
    }

    #[test]
    fn merge_updates_timestamp_and_keeps_user() {
        let first = Timestamp::now();
        let later = first.plus_secs(10);
        let e = Entitlement::new(user(), false, first).merge(true, later);
        assert_eq!(e.updated_at, later);
        assert_eq!(e.user_id, user());
    }

    proptest! {
        #[test]
        fn merge_order_does_not_matter(flags in proptest::collection::vec(any::<bool>(), 1..16)) {
            let now = Timestamp::now();
            let start = Entitlement::new(user(), flags[0], now);
            let forward = flags[1..].iter().fold(start.clone(), |acc, f| acc.merge(*f, now));
            let backward = flags[1..].iter().rev().fold(start, |acc, f| acc.merge(*f, now));

            prop_assert_eq!(forward.has_paid, backward.has_paid);
            prop_assert_eq!(forward.has_paid, flags.iter().any(|f| *f));
        }
    }
}
