//! Read-only HTTP API for the Squadfeed observer.
//!
//! This crate provides an Axum HTTP server that exposes three `GET`
//! endpoints at configurable paths:
//!
//! - **players** -- every connected player, in roster order
//! - **leaders** -- squad leaders, ordered by squad id
//! - **killfeed** -- recent wound events, by count (`lastn`) or by time
//!   cursor (`lasttime`)
//!
//! # Architecture
//!
//! [`AppState`] owns the kill feed and the latest roster snapshot. The
//! game-session connector never touches them directly: it sends
//! [`SessionUpdate`]s into a channel drained by a single ingest task, so
//! updates are applied in arrival order. Handlers take a read lock, run the
//! synchronous query from `squadfeed-core`, and release it.
//!
//! [`AppState`]: state::AppState
//! [`SessionUpdate`]: ingest::SessionUpdate

pub mod error;
pub mod handlers;
pub mod ingest;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use ingest::{SessionUpdate, ingest_channel, spawn_ingest};
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use startup::{StartupError, spawn_observer};
pub use state::AppState;
