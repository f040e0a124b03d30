//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries (viewer state) never write; commands (payment, minting) are the
//! only entry points that charge or sign.

pub mod handlers;

pub use handlers::{
    CompletePaymentCommand, CompletePaymentHandler, CompletePaymentResult,
    MintPlaybackTokenCommand, MintPlaybackTokenHandler, MintPlaybackTokenResult,
    ResolveViewerStateHandler, ResolveViewerStateQuery,
};
