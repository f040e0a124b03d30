//! Playback Gate - entitlement-gated playback tokens for premium video.
//!
//! Resolves whether a viewer may watch premium content, records one-time
//! purchases as durable entitlements, and mints short-lived RS256 tokens the
//! content delivery layer accepts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
