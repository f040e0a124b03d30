//! Playback token signing adapters.

mod rsa_signer;

pub use rsa_signer::RsaPlaybackSigner;
