//! Payment completion errors.
//!
//! | Error | Money moved | Entitlement written | Retry |
//! |-------|-------------|---------------------|-------|
//! | NotAuthenticated | no | no | after login |
//! | Declined | no | no | yes, fresh payment id |
//! | GatewayUnavailable | no | no | yes, fresh payment id |
//! | PaidButUnrecorded | **yes** | **no** | no, manual reconciliation |

use thiserror::Error;

use crate::domain::foundation::{PaymentId, UserId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// No resolved identity; nothing was attempted.
    #[error("Payment requires a logged-in viewer")]
    NotAuthenticated,

    /// The gateway returned a failure code (decline, user cancel, ...).
    #[error("Payment declined ({code}): {message}")]
    Declined { code: String, message: String },

    /// The gateway could not be reached or gave no terminal answer.
    #[error("Payment gateway unavailable: {0}")]
    GatewayUnavailable(String),

    /// The charge succeeded but the entitlement upsert failed.
    #[error("Payment {payment_id} for user {user_id} succeeded but entitlement was not recorded: {reason}")]
    PaidButUnrecorded {
        payment_id: PaymentId,
        user_id: UserId,
        reason: String,
    },
}

impl PaymentError {
    pub fn declined(code: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::Declined {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Message safe to show to the end user.
    pub fn user_message(&self) -> String {
        match self {
            PaymentError::NotAuthenticated => "Please log in before purchasing.".to_string(),
            PaymentError::Declined { message, .. } => format!("Payment failed: {}", message),
            PaymentError::GatewayUnavailable(_) => {
                "Payment service is unavailable. Please try again shortly.".to_string()
            }
            PaymentError::PaidButUnrecorded { payment_id, .. } => format!(
                "Your payment was received but access could not be activated. \
                 Please contact support with payment id {}.",
                payment_id
            ),
        }
    }

    /// Whether the viewer may simply try again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentError::Declined { .. } | PaymentError::GatewayUnavailable(_)
        )
    }

    /// Whether money was taken without granting access.
    pub fn requires_reconciliation(&self) -> bool {
        matches!(self, PaymentError::PaidButUnrecorded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ItemId;

    fn unrecorded() -> PaymentError {
        PaymentError::PaidButUnrecorded {
            payment_id: PaymentId::from_parts(
                &ItemId::new("course-1").unwrap(),
                &UserId::new("user-1").unwrap(),
                42,
            ),
            user_id: UserId::new("user-1").unwrap(),
            reason: "store down".to_string(),
        }
    }

    #[test]
    fn paid_but_unrecorded_asks_to_contact_support() {
        let message = unrecorded().user_message();
        assert!(message.contains("contact support"));
        assert!(message.contains("course-1-user-1-42"));
    }

    #[test]
    fn paid_but_unrecorded_is_not_retryable() {
        let err = unrecorded();
        assert!(!err.is_retryable());
        assert!(err.requires_reconciliation());
    }

    #[test]
    fn declined_is_retryable_and_shows_gateway_message() {
        let err = PaymentError::declined("USER_CANCEL", "user closed checkout");
        assert!(err.is_retryable());
        assert!(!err.requires_reconciliation());
        assert_eq!(err.user_message(), "Payment failed: user closed checkout");
    }
}
