//! Inbound channel from the game-session connector.
//!
//! The connector does not write to [`AppState`] itself. It sends a
//! [`SessionUpdate`] per notification into a bounded `mpsc` channel, and a
//! single ingest task applies them one at a time. Because there is exactly
//! one consumer, the kill feed's order is the order the connector sent.

use std::sync::Arc;

use squadfeed_types::{Player, WoundNotification};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::state::AppState;

/// Capacity of the inbound update channel.
///
/// Senders wait when the ingest task falls this far behind.
pub const INGEST_CHANNEL_CAPACITY: usize = 1024;

/// A notification from the game-session connector.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// A player was wounded.
    Wounded(WoundNotification),
    /// The full list of connected players changed.
    Roster(Vec<Player>),
}

/// Create the inbound update channel.
pub fn ingest_channel() -> (mpsc::Sender<SessionUpdate>, mpsc::Receiver<SessionUpdate>) {
    mpsc::channel(INGEST_CHANNEL_CAPACITY)
}

/// Apply a single update to the shared state.
pub async fn apply(state: &AppState, update: SessionUpdate) {
    match update {
        SessionUpdate::Wounded(wound) => {
            state.record_wound(&wound).await;
            debug!(weapon = %wound.weapon, teamkill = wound.teamkill, "wound ingested");
        }
        SessionUpdate::Roster(players) => {
            let count = players.len();
            state.replace_roster(players).await;
            debug!(players = count, "roster replaced");
        }
    }
}

/// Drain the channel until every sender is dropped.
pub async fn run_ingest(state: Arc<AppState>, mut rx: mpsc::Receiver<SessionUpdate>) {
    while let Some(update) = rx.recv().await {
        apply(&state, update).await;
    }
    debug!("ingest channel closed");
}

/// Spawn [`run_ingest`] on a background Tokio task.
///
/// The task ends once all senders are dropped; the caller may await the
/// returned handle to know every queued update has been applied.
pub fn spawn_ingest(state: Arc<AppState>, rx: mpsc::Receiver<SessionUpdate>) -> JoinHandle<()> {
    tokio::spawn(run_ingest(state, rx))
}
