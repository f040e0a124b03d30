//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::{MintPlaybackTokenHandler, ResolveViewerStateHandler};
use crate::ports::{EntitlementStore, PlaybackTokenSigner, SessionValidator};

/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub session_validator: Arc<dyn SessionValidator>,
    pub entitlement_store: Arc<dyn EntitlementStore>,
    pub signer: Arc<dyn PlaybackTokenSigner>,
    pub customer_subdomain: Arc<str>,
}

impl AppState {
    pub fn new(
        session_validator: Arc<dyn SessionValidator>,
        entitlement_store: Arc<dyn EntitlementStore>,
        signer: Arc<dyn PlaybackTokenSigner>,
        customer_subdomain: impl Into<String>,
    ) -> Self {
        Self {
            session_validator,
            entitlement_store,
            signer,
            customer_subdomain: Arc::from(customer_subdomain.into()),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn mint_playback_token_handler(&self) -> MintPlaybackTokenHandler {
        MintPlaybackTokenHandler::new(
            self.session_validator.clone(),
            self.entitlement_store.clone(),
            self.signer.clone(),
            self.customer_subdomain.as_ref(),
        )
    }

    pub fn resolve_viewer_state_handler(&self) -> ResolveViewerStateHandler {
        ResolveViewerStateHandler::new(
            self.session_validator.clone(),
            self.entitlement_store.clone(),
        )
    }
}
