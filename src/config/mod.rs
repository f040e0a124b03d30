//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PLAYBACK_GATE` prefix
//! and nested values are separated by a double underscore.
//!
//! # Example
//!
//! ```no_run
//! use playback_gate::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod auth;
mod database;
mod error;
mod payment;
mod server;
mod signing;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};
pub use signing::SigningConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Entitlement store (PostgreSQL)
    pub database: DatabaseConfig,

    /// Identity provider
    pub auth: AuthConfig,

    /// Playback token signing
    pub signing: SigningConfig,

    /// Premium item offered at checkout. Only read by embedders that drive
    /// `CompletePaymentHandler`; the token server starts without it.
    #[serde(default)]
    pub payment: Option<PaymentConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PLAYBACK_GATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `PLAYBACK_GATE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PLAYBACK_GATE__SIGNING__KEY_ID=...` -> `signing.key_id = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("PLAYBACK_GATE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.signing.validate()?;
        if let Some(payment) = &self.payment {
            payment.validate()?;
        }
        Ok(())
    }
}
