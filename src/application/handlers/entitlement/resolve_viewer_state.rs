//! ResolveViewerStateHandler - Query handler deciding what a viewer may see.
//!
//! Every call is a fresh evaluation starting from `Loading`; nothing is
//! cached between calls. The handler fails closed: no error path ever
//! yields `Paid`.

use std::sync::Arc;

use crate::domain::entitlement::ViewerEvaluation;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{EntitlementStore, SessionValidator};

/// Query to evaluate a viewer from an optional bearer session token.
#[derive(Debug, Clone, Default)]
pub struct ResolveViewerStateQuery {
    pub bearer_token: Option<String>,
}

#[derive(Clone)]
pub struct ResolveViewerStateHandler {
    session_validator: Arc<dyn SessionValidator>,
    store: Arc<dyn EntitlementStore>,
}

impl ResolveViewerStateHandler {
    pub fn new(
        session_validator: Arc<dyn SessionValidator>,
        store: Arc<dyn EntitlementStore>,
    ) -> Self {
        Self {
            session_validator,
            store,
        }
    }

    pub async fn handle(&self, query: ResolveViewerStateQuery) -> ViewerEvaluation {
        let token = match query
            .bearer_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            Some(token) => token,
            None => return ViewerEvaluation::not_logged_in(),
        };

        let viewer = match self.session_validator.validate(token).await {
            Ok(user) => Some(user),
            Err(AuthError::ServiceUnavailable(reason)) => {
                tracing::warn!(%reason, "Identity provider unavailable, treating viewer as not logged in");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                None
            }
        };

        self.resolve_for(viewer).await
    }

    /// Entitlement step for an identity that is already resolved.
    pub async fn resolve_for(&self, viewer: Option<AuthenticatedUser>) -> ViewerEvaluation {
        let viewer = match viewer {
            Some(viewer) => viewer,
            None => return ViewerEvaluation::not_logged_in(),
        };

        match self.store.get_entitlement(&viewer.id).await {
            Ok(Some(entitlement)) if entitlement.grants_access() => {
                ViewerEvaluation::paid(viewer)
            }
            Ok(Some(_)) => ViewerEvaluation::not_paid(viewer),
            Ok(None) => {
                tracing::debug!(user_id = %viewer.id, "No entitlement record");
                ViewerEvaluation::not_paid(viewer)
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %viewer.id,
                    error = %e,
                    "Entitlement lookup failed, treating viewer as not paid"
                );
                ViewerEvaluation::not_paid(viewer)
            }
        }
    }
}
