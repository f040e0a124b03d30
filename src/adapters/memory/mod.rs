//! In-memory adapters for tests and single-process development.

mod entitlement_store;

pub use entitlement_store::InMemoryEntitlementStore;
