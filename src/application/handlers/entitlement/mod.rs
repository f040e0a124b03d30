//! Entitlement handlers.

mod resolve_viewer_state;

pub use resolve_viewer_state::{ResolveViewerStateHandler, ResolveViewerStateQuery};
