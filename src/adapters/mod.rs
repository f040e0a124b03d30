//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Identity provider session validation (HTTP, mock)
//! - `gateway` - Payment gateway (mock; the hosted checkout is client-driven)
//! - `http` - Axum REST API
//! - `memory` - In-memory entitlement store
//! - `postgres` - PostgreSQL entitlement store
//! - `signing` - RS256 playback token signer

pub mod auth;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod signing;
