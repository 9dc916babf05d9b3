//! Bridge binary for the Squadfeed observer.
//!
//! Wires the game-session connector feed (NATS) to the read-only observer
//! API. The bridge never writes back to the game server.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `squadfeed.yaml` (or `SQUADFEED_CONFIG`)
//! 3. Create the shared observer state and its ingest channel
//! 4. Start the Observer API server
//! 5. Connect to NATS and forward connector messages until the feed ends
//!    or `Ctrl-C` is received

mod connector;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use squadfeed_core::config::SquadfeedConfig;
use squadfeed_observer::{AppState, ingest_channel, spawn_ingest, spawn_observer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::connector::NatsConnector;
use crate::error::BridgeError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "squadfeed.yaml";

/// Application entry point for the bridge.
///
/// # Errors
///
/// Returns an error if configuration, the observer server, or the NATS
/// connection cannot be set up.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("squadfeed-bridge starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = config.observer.host,
        port = config.observer.port,
        nats_url = config.connector.nats_url,
        wound_subject = config.connector.wound_subject,
        roster_subject = config.connector.roster_subject,
        "Configuration loaded"
    );

    // 3. Shared state and ingest channel.
    let state = Arc::new(AppState::new());
    let (tx, rx) = ingest_channel();
    let ingest_handle = spawn_ingest(Arc::clone(&state), rx);

    // 4. Observer API.
    let observer_handle = spawn_observer(config.observer.clone(), Arc::clone(&state))
        .map_err(BridgeError::from)?;

    // 5. Connector feed.
    let connector = NatsConnector::connect(&config.connector.nats_url).await?;
    tokio::select! {
        result = connector.forward(&config.connector, tx) => result?,
        _ = tokio::signal::ctrl_c() => info!("Ctrl-C received, shutting down"),
    }

    observer_handle.abort();
    ingest_handle.abort();

    info!("squadfeed-bridge shutdown complete");

    Ok(())
}

/// Load configuration from `SQUADFEED_CONFIG` or `squadfeed.yaml`.
///
/// A missing file means defaults; environment overrides and route
/// validation apply either way.
fn load_config() -> Result<SquadfeedConfig, BridgeError> {
    let path = std::env::var_os("SQUADFEED_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        Ok(SquadfeedConfig::from_file(&path)?)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        let mut config = SquadfeedConfig::default();
        config.apply_env_overrides()?;
        config.observer.validate()?;
        Ok(config)
    }
}
