//! Scriptable payment gateway for tests and local development.
//!
//! The production charge runs in the viewer's browser against the hosted
//! checkout; this adapter stands in for that result on the server side.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::payment::{ChargeRequest, ChargeResult};
use crate::ports::{GatewayError, PaymentGateway};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Behavior {
    Approve,
    Decline { code: String, message: String },
    Unavailable(String),
}

/// Records every charge request and answers with a fixed outcome.
#[derive(Debug)]
pub struct MockPaymentGateway {
    behavior: Mutex<Behavior>,
    charges: Mutex<Vec<ChargeRequest>>,
}

impl MockPaymentGateway {
    /// Every charge succeeds (`code` absent).
    pub fn approving() -> Self {
        Self::with_behavior(Behavior::Approve)
    }

    /// Every charge returns the given failure code.
    pub fn declining(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Decline {
            code: code.into(),
            message: message.into(),
        })
    }

    /// Every charge fails without a terminal result.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Unavailable(reason.into()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            charges: Mutex::new(Vec::new()),
        }
    }

    /// Switch to approving subsequent charges.
    pub fn approve_next(&self) {
        if let Ok(mut behavior) = self.behavior.lock() {
            *behavior = Behavior::Approve;
        }
    }

    /// Requests seen so far, oldest first.
    pub fn charges(&self) -> Vec<ChargeRequest> {
        self.charges
            .lock()
            .map(|charges| charges.clone())
            .unwrap_or_default()
    }

    pub fn charge_count(&self) -> usize {
        self.charges.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeResult, GatewayError> {
        let behavior = self
            .behavior
            .lock()
            .map(|b| b.clone())
            .map_err(|_| GatewayError::Unreachable("mock gateway lock poisoned".to_string()))?;

        if let Ok(mut charges) = self.charges.lock() {
            charges.push(request);
        }

        match behavior {
            Behavior::Approve => Ok(ChargeResult::approved()),
            Behavior::Decline { code, message } => Ok(ChargeResult::failed(code, message)),
            Behavior::Unavailable(reason) => Err(GatewayError::Unreachable(reason)),
        }
    }
}
