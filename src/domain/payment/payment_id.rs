//! Payment id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::foundation::{ItemId, PaymentId, Timestamp, UserId};

/// Hands out `<item>-<user>-<millis>` ids with strictly increasing millis.
///
/// Two attempts in the same millisecond get distinct ids, and a retry after a
/// crash never reuses the id of an in-flight charge.
#[derive(Debug, Default)]
pub struct PaymentIdGenerator {
    last_millis: AtomicI64,
}

impl PaymentIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, item_id: &ItemId, user_id: &UserId) -> PaymentId {
        PaymentId::from_parts(item_id, user_id, self.next_millis(Timestamp::now()))
    }

    fn next_millis(&self, now: Timestamp) -> i64 {
        let wall = now.as_unix_millis();
        let mut last = self.last_millis.load(Ordering::Relaxed);
        loop {
            let candidate = wall.max(last + 1);
            match self.last_millis.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
