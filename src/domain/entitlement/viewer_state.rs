//! Viewer entitlement state machine.
//!
//! ```text
//!                ┌──────────────┐
//!       ┌───────▶│ NotLoggedIn  │───┐
//!       │        └──────────────┘   │
//! ┌─────────┐    ┌──────────────┐   │ re-evaluate
//! │ Loading │───▶│   NotPaid    │───┤
//! └─────────┘    └──────────────┘   │
//!       │        ┌──────────────┐   │
//!       └───────▶│     Paid     │───┘
//!                └──────────────┘
//! ```
//!
//! A settled state can only go back to `Loading`. There is no direct
//! `NotPaid -> Paid` edge: a completed payment becomes visible only through a
//! fresh evaluation against the entitlement store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedUser, StateMachine};

/// Whether a viewer may see premium content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerState {
    /// Evaluation in progress.
    Loading,
    /// No resolvable identity.
    NotLoggedIn,
    /// Identity known, entitlement absent, false, or unreadable.
    NotPaid,
    /// Entitlement recorded with `has_paid = true`.
    Paid,
}

impl ViewerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerState::Loading => "loading",
            ViewerState::NotLoggedIn => "not_logged_in",
            ViewerState::NotPaid => "not_paid",
            ViewerState::Paid => "paid",
        }
    }
}

impl StateMachine for ViewerState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewerState::*;
        matches!(
            (self, target),
            (Loading, NotLoggedIn)
                | (Loading, NotPaid)
                | (Loading, Paid)
                | (NotLoggedIn, Loading)
                | (NotPaid, Loading)
                | (Paid, Loading)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewerState::*;
        match self {
            Loading => vec![NotLoggedIn, NotPaid, Paid],
            NotLoggedIn | NotPaid | Paid => vec![Loading],
        }
    }
}

/// Outcome of one evaluation: the settled state plus the identity it was
/// resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerEvaluation {
    state: ViewerState,
    viewer: Option<AuthenticatedUser>,
}

impl ViewerEvaluation {
    pub(crate) fn not_logged_in() -> Self {
        Self::settle(ViewerState::NotLoggedIn, None)
    }

    pub(crate) fn not_paid(viewer: AuthenticatedUser) -> Self {
        Self::settle(ViewerState::NotPaid, Some(viewer))
    }

    pub(crate) fn paid(viewer: AuthenticatedUser) -> Self {
        Self::settle(ViewerState::Paid, Some(viewer))
    }

    fn settle(state: ViewerState, viewer: Option<AuthenticatedUser>) -> Self {
        debug_assert!(ViewerState::Loading.can_transition_to(&state));
        Self { state, viewer }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn viewer(&self) -> Option<&AuthenticatedUser> {
        self.viewer.as_ref()
    }

    /// Permission to start a payment. Only handed out in `NotPaid`.
    pub fn payment_capability(&self) -> Option<PaymentCapability> {
        match (self.state, &self.viewer) {
            (ViewerState::NotPaid, Some(viewer)) => Some(PaymentCapability {
                viewer: viewer.clone(),
            }),
            _ => None,
        }
    }
}

/// Proof that the viewer was evaluated as `NotPaid` and may start checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCapability {
    viewer: AuthenticatedUser,
}

impl PaymentCapability {
    pub fn viewer(&self) -> &AuthenticatedUser {
        &self.viewer
    }

    pub fn into_viewer(self) -> AuthenticatedUser {
        self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn viewer() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-1").unwrap(), "v@example.com")
    }

    #[test]
    fn loading_settles_into_any_outcome() {
        for target in [ViewerState::NotLoggedIn, ViewerState::NotPaid, ViewerState::Paid] {
            assert_eq!(ViewerState::Loading.transition_to(target), Ok(target));
        }
    }

    #[test]
    fn not_paid_cannot_flip_straight_to_paid() {
        assert!(ViewerState::NotPaid.transition_to(ViewerState::Paid).is_err());
    }

    #[test]
    fn settled_states_only_return_to_loading() {
        for state in [ViewerState::NotLoggedIn, ViewerState::NotPaid, ViewerState::Paid] {
            assert_eq!(state.valid_transitions(), vec![ViewerState::Loading]);
            assert!(!state.is_terminal());
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for state in [
            ViewerState::Loading,
            ViewerState::NotLoggedIn,
            ViewerState::NotPaid,
            ViewerState::Paid,
        ] {
            for target in state.valid_transitions() {
                assert!(state.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn payment_capability_only_when_not_paid() {
        assert!(ViewerEvaluation::not_logged_in().payment_capability().is_none());
        assert!(ViewerEvaluation::paid(viewer()).payment_capability().is_none());

        let capability = ViewerEvaluation::not_paid(viewer()).payment_capability().unwrap();
        assert_eq!(capability.viewer().id.as_str(), "user-1");
    }

    #[test]
    fn state_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ViewerState::NotLoggedIn).unwrap(), "\"not_logged_in\"");
        assert_eq!(ViewerState::NotPaid.as_str(), "not_paid");
    }
}
