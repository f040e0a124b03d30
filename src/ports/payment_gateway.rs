//! Payment gateway port.
//!
//! Drives a single hosted-checkout charge and reports its terminal result.
//! A returned `ChargeResult` is a terminal answer (success or failure code);
//! `GatewayError` means no terminal answer was obtained.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::{ChargeRequest, ChargeResult};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Run one charge to completion.
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeResult, GatewayError>;
}

/// Failure to obtain a terminal charge result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Gateway unreachable: {0}")]
    Unreachable(String),

    #[error("Gateway returned an unreadable response: {0}")]
    InvalidResponse(String),
}
