//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, auth types and error types
//! shared by the entitlement, payment and playback modules.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ItemId, PaymentId, UserId, VideoId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
