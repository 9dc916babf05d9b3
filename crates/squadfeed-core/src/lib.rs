//! In-memory kill feed and roster projection for the Squadfeed observer.
//!
//! This crate is the passive core of the observer: it never mutates game
//! state, it only projects what the game-session connector reports.
//!
//! # Modules
//!
//! - [`projector`] -- Live [`Player`] to wire [`PlayerView`] projection.
//! - [`killfeed`] -- [`KillFeed`], the bounded, arrival-ordered wound buffer
//!   with count and cursor queries.
//! - [`roster`] -- Player and squad-leader listings over the live roster.
//! - [`params`] -- Query-string policy for the kill feed endpoint.
//! - [`config`] -- Configuration loading from `squadfeed.yaml`.
//!
//! All operations are synchronous and run in time proportional to the
//! roster size or the feed capacity. Callers that share a [`KillFeed`]
//! across tasks wrap it in their own lock.
//!
//! [`Player`]: squadfeed_types::Player
//! [`PlayerView`]: squadfeed_types::PlayerView
//! [`KillFeed`]: killfeed::KillFeed

pub mod config;
pub mod killfeed;
pub mod params;
pub mod projector;
pub mod roster;

pub use killfeed::{KILLFEED_CAPACITY, KillFeed};
pub use params::KillfeedSelector;
