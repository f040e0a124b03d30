//! HTTP adapter for viewer entitlement state.

mod dto;
mod handlers;
mod routes;

pub use dto::ViewerStateResponse;
pub use handlers::get_viewer_state;
pub use routes::viewer_routes;
