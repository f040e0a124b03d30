//! HTTP adapter for playback token issuance.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, MintTokenRequest, MintTokenResponse};
pub use handlers::{mint_token, PlaybackApiError};
pub use routes::playback_routes;
