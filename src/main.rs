//! Playback Gate server.

use std::error::Error;
use std::sync::Arc;

use playback_gate::adapters::auth::HttpSessionValidator;
use playback_gate::adapters::http::{api_router, AppState};
use playback_gate::adapters::postgres::PostgresEntitlementStore;
use playback_gate::adapters::signing::RsaPlaybackSigner;
use playback_gate::config::AppConfig;
use playback_gate::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    tracing::info!(environment = ?config.server.environment, "Starting playback gate");

    // Parsed once; every mint shares this key read-only.
    let signer = RsaPlaybackSigner::from_config(&config.signing).map_err(|e| {
        tracing::error!(error = %e, "Failed to load playback signing key");
        e
    })?;
    tracing::info!(key_id = %config.signing.key_id.trim(), "Playback signing key loaded");

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let session_validator = HttpSessionValidator::new(&config.auth)?;

    let state = AppState::new(
        Arc::new(session_validator),
        Arc::new(PostgresEntitlementStore::new(pool)),
        Arc::new(signer),
        config.signing.customer_subdomain.trim(),
    );
    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
