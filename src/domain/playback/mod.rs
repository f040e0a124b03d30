//! Playback module - signed, time-bound access tokens for one video.

mod claims;
mod errors;

pub use claims::{PlaybackClaims, PLAYBACK_TOKEN_TTL_SECS};
pub use errors::MintError;
