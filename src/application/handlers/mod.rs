//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod entitlement;
pub mod payment;
pub mod playback;

pub use entitlement::{ResolveViewerStateHandler, ResolveViewerStateQuery};
pub use payment::{CompletePaymentCommand, CompletePaymentHandler, CompletePaymentResult};
pub use playback::{MintPlaybackTokenCommand, MintPlaybackTokenHandler, MintPlaybackTokenResult};
