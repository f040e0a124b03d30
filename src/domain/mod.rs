//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `entitlement` - Entitlement record and viewer state machine
//! - `payment` - Charge requests, payment ids and payment errors
//! - `playback` - Playback token claims and minting errors

pub mod entitlement;
pub mod foundation;
pub mod payment;
pub mod playback;
