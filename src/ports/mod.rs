//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - Resolves a bearer session token to an identity
//! - `EntitlementStore` - Reads and upserts the per-user `has_paid` record
//! - `PaymentGateway` - Runs a hosted-checkout charge
//! - `PlaybackTokenSigner` - Signs playback token claims

mod entitlement_store;
mod payment_gateway;
mod session_validator;
mod token_signer;

pub use entitlement_store::EntitlementStore;
pub use payment_gateway::{GatewayError, PaymentGateway};
pub use session_validator::SessionValidator;
pub use token_signer::{PlaybackTokenSigner, SigningError};
