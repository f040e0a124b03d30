//! Payment gateway adapters.

mod mock;

pub use mock::MockPaymentGateway;
