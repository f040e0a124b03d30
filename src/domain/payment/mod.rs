//! Payment module - one-time purchase of premium access.

mod charge;
mod errors;
mod payment_id;

pub use charge::{ChargeRequest, ChargeResult, PayMethod, PremiumItem};
pub use errors::PaymentError;
pub use payment_id::PaymentIdGenerator;
