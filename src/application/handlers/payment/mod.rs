//! Payment handlers.

mod complete_payment;

pub use complete_payment::{CompletePaymentCommand, CompletePaymentHandler, CompletePaymentResult};
