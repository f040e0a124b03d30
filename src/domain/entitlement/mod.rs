//! Entitlement module - who may watch premium content.
//!
//! - `Entitlement` - the durable per-user record
//! - `ViewerState` / `ViewerEvaluation` - the fail-closed viewer state machine

mod record;
mod viewer_state;

pub use record::Entitlement;
pub use viewer_state::{PaymentCapability, ViewerEvaluation, ViewerState};
