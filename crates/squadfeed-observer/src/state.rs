//! Shared application state for the Observer API server.
//!
//! [`AppState`] holds the kill feed and the most recent roster reported by
//! the connector. It is created once at startup and handed to both the
//! ingest task and the router; nothing else owns a copy.

use std::sync::Arc;

use squadfeed_core::KillFeed;
use squadfeed_types::{Player, WoundNotification};
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Recent wound events.
    pub killfeed: Arc<RwLock<KillFeed>>,
    /// Players currently connected, in the connector's order.
    pub roster: Arc<RwLock<Vec<Player>>>,
}

impl AppState {
    /// Create a new application state with an empty feed and roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wound notification in the kill feed.
    pub async fn record_wound(&self, wound: &WoundNotification) {
        self.killfeed.write().await.append(wound);
    }

    /// Replace the live roster with a fresh snapshot.
    pub async fn replace_roster(&self, players: Vec<Player>) {
        *self.roster.write().await = players;
    }
}
