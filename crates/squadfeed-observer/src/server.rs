//! Observer HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the Axum
//! server until the process is terminated.

use std::net::SocketAddr;
use std::sync::Arc;

use squadfeed_core::config::{ConfigError, ObserverConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Start the Observer HTTP server.
///
/// Validates the route paths, binds to the configured address, and serves
/// requests until the process is terminated.
///
/// # Errors
///
/// Returns an error if the routes are invalid, the TCP listener cannot
/// bind, or the server encounters a fatal I/O error.
pub async fn start_server(
    config: &ObserverConfig,
    state: Arc<AppState>,
) -> Result<(), ServerError> {
    config.validate()?;
    let addr = socket_addr(config)?;

    let router = build_router(state, config);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(
        %addr,
        players = config.players_path,
        leaders = config.leaders_path,
        killfeed = config.killfeed_path,
        "Observer server listening"
    );

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Parse the configured host and port into a socket address.
pub(crate) fn socket_addr(config: &ObserverConfig) -> Result<SocketAddr, ServerError> {
    let raw = format!("{}:{}", config.host, config.port);
    raw.parse()
        .map_err(|e| ServerError::Bind(format!("invalid address {raw}: {e}")))
}

/// Errors that can occur when starting or running the Observer server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The route configuration cannot be mounted.
    #[error("route config error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
