//! Playback handlers.

mod mint_playback_token;

pub use mint_playback_token::{
    MintPlaybackTokenCommand, MintPlaybackTokenHandler, MintPlaybackTokenResult,
};
