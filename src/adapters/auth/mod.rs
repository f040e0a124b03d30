//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `http` - Identity provider user endpoint over HTTPS
//! - `mock` - Test implementation that needs no external service

mod http;
mod mock;

pub use http::HttpSessionValidator;
pub use mock::MockSessionValidator;
