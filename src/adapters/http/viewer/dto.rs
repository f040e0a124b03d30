//! HTTP DTOs for viewer endpoints.

use serde::Serialize;

use crate::domain::entitlement::{ViewerEvaluation, ViewerState};

#[derive(Debug, Clone, Serialize)]
pub struct ViewerStateResponse {
    pub state: ViewerState,
}

impl From<&ViewerEvaluation> for ViewerStateResponse {
    fn from(evaluation: &ViewerEvaluation) -> Self {
        Self {
            state: evaluation.state(),
        }
    }
}
