//! Premium item configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::ItemId;
use crate::domain::payment::{PayMethod, PremiumItem};

/// The single premium offering and how it is charged.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub item_id: String,

    /// Order name shown on the hosted checkout page
    pub item_label: String,

    pub amount: u64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub pay_method: PayMethod,
}

impl PaymentConfig {
    /// Build the domain item. Call after `validate`.
    pub fn premium_item(&self) -> Result<PremiumItem, ValidationError> {
        let item_id = ItemId::new(self.item_id.as_str())
            .map_err(|_| ValidationError::MissingRequired("PAYMENT__ITEM_ID"))?;
        Ok(PremiumItem {
            item_id,
            label: self.item_label.clone(),
            amount: self.amount,
            currency: self.currency.to_ascii_uppercase(),
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.item_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__ITEM_ID"));
        }
        if self.item_label.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__ITEM_LABEL"));
        }
        if self.amount == 0 {
            return Err(ValidationError::InvalidAmount);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCurrency(self.currency.clone()));
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "KRW".to_string()
}
