//! CompletePaymentHandler - Command handler turning a successful charge into
//! a durable entitlement.
//!
//! Flow:
//! 1. Require a resolved viewer
//! 2. Generate a fresh payment id
//! 3. Charge through the gateway and wait for a terminal result
//! 4. On success, upsert `has_paid = true`
//! 5. Re-evaluate the viewer against the store
//!
//! Only step 4 failing after step 3 succeeded leaves money taken without
//! access. That case is logged for reconciliation and surfaced to the viewer
//! with the payment id.

use std::sync::Arc;

use crate::application::handlers::entitlement::ResolveViewerStateHandler;
use crate::domain::entitlement::{PaymentCapability, ViewerEvaluation};
use crate::domain::foundation::{AuthenticatedUser, PaymentId};
use crate::domain::payment::{ChargeRequest, PayMethod, PaymentError, PaymentIdGenerator, PremiumItem};
use crate::ports::{EntitlementStore, PaymentGateway};

/// Command to buy the premium item.
#[derive(Debug, Clone)]
pub struct CompletePaymentCommand {
    pub viewer: Option<AuthenticatedUser>,
    pub item: PremiumItem,
    pub pay_method: PayMethod,
}

impl CompletePaymentCommand {
    /// Build a command from a `NotPaid` evaluation's capability.
    pub fn from_capability(
        capability: PaymentCapability,
        item: PremiumItem,
        pay_method: PayMethod,
    ) -> Self {
        Self {
            viewer: Some(capability.into_viewer()),
            item,
            pay_method,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletePaymentResult {
    pub payment_id: PaymentId,
    /// Fresh evaluation after the entitlement was recorded.
    pub viewer: ViewerEvaluation,
}

#[derive(Clone)]
pub struct CompletePaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn EntitlementStore>,
    resolver: ResolveViewerStateHandler,
    payment_ids: Arc<PaymentIdGenerator>,
}

impl CompletePaymentHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        store: Arc<dyn EntitlementStore>,
        resolver: ResolveViewerStateHandler,
        payment_ids: Arc<PaymentIdGenerator>,
    ) -> Self {
        Self {
            gateway,
            store,
            resolver,
            payment_ids,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompletePaymentCommand,
    ) -> Result<CompletePaymentResult, PaymentError> {
        let viewer = cmd.viewer.ok_or(PaymentError::NotAuthenticated)?;

        let payment_id = self.payment_ids.next(&cmd.item.item_id, &viewer.id);
        let request = ChargeRequest {
            payment_id: payment_id.clone(),
            item_id: cmd.item.item_id.clone(),
            order_name: cmd.item.label.clone(),
            amount: cmd.item.amount,
            currency: cmd.item.currency.clone(),
            pay_method: cmd.pay_method,
            customer_email: viewer.email.clone(),
        };

        tracing::info!(
            payment_id = %payment_id,
            user_id = %viewer.id,
            amount = cmd.item.amount,
            currency = %cmd.item.currency,
            "Starting charge"
        );

        let result = self.gateway.charge(request).await.map_err(|e| {
            tracing::warn!(payment_id = %payment_id, error = %e, "Payment gateway unavailable");
            PaymentError::GatewayUnavailable(e.to_string())
        })?;

        if !result.is_success() {
            let code = result.code.unwrap_or_default();
            let message = result.message.unwrap_or_default();
            tracing::info!(payment_id = %payment_id, %code, %message, "Charge not completed");
            return Err(PaymentError::declined(code, message));
        }

        if let Err(e) = self.store.upsert_entitlement(&viewer.id, true).await {
            tracing::error!(
                target: "payment_reconciliation",
                alert = "paid_but_unrecorded",
                payment_id = %payment_id,
                user_id = %viewer.id,
                error = %e,
                "Charge succeeded but entitlement was not recorded"
            );
            return Err(PaymentError::PaidButUnrecorded {
                payment_id,
                user_id: viewer.id,
                reason: e.to_string(),
            });
        }

        tracing::info!(payment_id = %payment_id, user_id = %viewer.id, "Entitlement recorded");

        let evaluation = self.resolver.resolve_for(Some(viewer)).await;

        Ok(CompletePaymentResult {
            payment_id,
            viewer: evaluation,
        })
    }
}
