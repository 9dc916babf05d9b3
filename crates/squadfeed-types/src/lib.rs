//! Shared type definitions for the Squadfeed observer.
//!
//! Two families of types live here:
//!
//! - **Live entities** ([`Player`], [`Squad`], [`WoundNotification`]) as
//!   delivered by the game-session connector. These are deserialized from
//!   the connector's camelCase JSON and may be incomplete.
//! - **Wire projections** ([`PlayerView`], [`WoundEvent`]) served to external
//!   dashboards. Their JSON shape is stable and flows downstream to
//!   `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Typed wrappers for player, team, squad and platform identifiers
//! - [`live`] -- Connector-side entities
//! - [`views`] -- Dashboard-facing projections

pub mod ids;
pub mod live;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use ids::{PlayerId, SquadId, SteamId, TeamId};
pub use live::{Player, Squad, WoundNotification};
pub use views::{PlayerView, WoundEvent};
