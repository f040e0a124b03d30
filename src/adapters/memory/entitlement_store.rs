//! In-memory entitlement store for tests and local development.
//!
//! The write lock is held across the whole read-modify-write of an upsert,
//! which gives the same per-user atomicity as the SQL `ON CONFLICT` path.
//! Failure injection lets tests drive the fail-closed and reconciliation
//! branches.
//!
//! # Example
//!
//! ```ignore
//! let store = InMemoryEntitlementStore::new();
//! store.upsert_entitlement(&user_id, true).await?;
//! assert!(store.get_entitlement(&user_id).await?.unwrap().grants_access());
//!
//! store.fail_writes(true);
//! assert!(store.upsert_entitlement(&user_id, true).await.is_err());
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entitlement::Entitlement;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::EntitlementStore;

#[derive(Debug, Default)]
pub struct InMemoryEntitlementStore {
    records: RwLock<HashMap<UserId, Entitlement>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryEntitlementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record without going through the upsert path.
    pub fn with_entitlement(mut self, user_id: UserId, has_paid: bool) -> Self {
        let record = Entitlement::new(user_id.clone(), has_paid, Timestamp::now());
        self.records.get_mut().insert(user_id, record);
        self
    }

    /// Makes every subsequent read fail with a database error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent upsert fail with a database error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `get_entitlement` calls, failed ones included.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `upsert_entitlement` calls, failed ones included.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn get_entitlement(&self, user_id: &UserId) -> Result<Option<Entitlement>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::database("Simulated entitlement read failure"));
        }

        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn upsert_entitlement(
        &self,
        user_id: &UserId,
        has_paid: bool,
    ) -> Result<Entitlement, DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::database("Simulated entitlement write failure")
                .with_detail("user_id", user_id.as_str()));
        }

        let now = Timestamp::now();
        let mut records = self.records.write().await;
        let record = match records.get(user_id) {
            Some(existing) => existing.merge(has_paid, now),
            None => Entitlement::new(user_id.clone(), has_paid, now),
        };
        records.insert(user_id.clone(), record.clone());
        Ok(record)
    }
}
