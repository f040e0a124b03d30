//! Charge request/result exchanged with the payment gateway.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemId, PaymentId};

/// Payment method requested at the hosted checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayMethod {
    Card,
    Transfer,
    VirtualAccount,
    Mobile,
    EasyPay,
}

impl PayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayMethod::Card => "card",
            PayMethod::Transfer => "transfer",
            PayMethod::VirtualAccount => "virtual_account",
            PayMethod::Mobile => "mobile",
            PayMethod::EasyPay => "easy_pay",
        }
    }
}

impl Default for PayMethod {
    fn default() -> Self {
        PayMethod::Card
    }
}

/// What the viewer is buying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumItem {
    pub item_id: ItemId,
    /// Label shown on the hosted checkout page.
    pub label: String,
    /// Amount in the currency's minor-free unit (e.g. whole KRW).
    pub amount: u64,
    /// ISO 4217 code.
    pub currency: String,
}

/// A single charge attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeRequest {
    pub payment_id: PaymentId,
    pub item_id: ItemId,
    pub order_name: String,
    pub amount: u64,
    pub currency: String,
    pub pay_method: PayMethod,
    pub customer_email: String,
}

/// Terminal result reported by the gateway.
///
/// An absent `code` means the charge succeeded; any code (including a user
/// cancellation) is a failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChargeResult {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ChargeResult {
    pub fn approved() -> Self {
        Self {
            code: None,
            message: None,
        }
    }

    pub fn failed(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code.is_none()
    }
}
