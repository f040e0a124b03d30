//! PostgreSQL adapters.
//!
//! - `PostgresEntitlementStore` - `profiles` table behind the `EntitlementStore` port

mod entitlement_store;

pub use entitlement_store::PostgresEntitlementStore;
