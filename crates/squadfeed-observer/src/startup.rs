//! Observer server startup helper.
//!
//! Provides [`spawn_observer`] which launches the Observer HTTP server on a
//! background Tokio task so it runs alongside the connector feed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use squadfeed_observer::{AppState, spawn_observer};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new());
//! let handle = spawn_observer(config.observer.clone(), state)?;
//! ```

use std::sync::Arc;

use squadfeed_core::config::ObserverConfig;
use tokio::task::JoinHandle;

use crate::server::{ServerError, socket_addr};
use crate::state::AppState;

/// Errors that can occur when spawning the Observer server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server configuration was rejected.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the Observer HTTP server on a background Tokio task.
///
/// The route paths and bind address are checked before the task is
/// spawned so obvious misconfigurations surface to the caller. Bind and
/// serve failures after that are logged from the background task.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the routes or address are invalid.
pub fn spawn_observer(
    config: ObserverConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<()>, StartupError> {
    config.validate().map_err(ServerError::from)?;
    let addr = socket_addr(&config)?;

    let handle = tokio::spawn(async move {
        if let Err(e) = crate::server::start_server(&config, state).await {
            tracing::error!(error = %e, "Observer server exited with error");
        }
    });

    tracing::info!(%addr, "Observer server spawned on background task");

    Ok(handle)
}
