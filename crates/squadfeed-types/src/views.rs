//! Dashboard-facing projections.
//!
//! These are the only shapes that leave the process. Key names are fixed
//! by the dashboards that consume them, so every field carries an explicit
//! `serde` rename rather than relying on a blanket case conversion.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{PlayerId, SquadId, SteamId, TeamId};

/// Minimal, stable snapshot of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerView {
    /// In-game display name.
    pub name: String,
    /// In-game slot identifier.
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
    /// Platform identity; omitted while the connector has not resolved it.
    #[serde(rename = "steamID", default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub steam_id: Option<SteamId>,
    /// Team the player is on.
    #[serde(rename = "teamID")]
    pub team_id: TeamId,
    /// Squad identifier; omitted from the JSON when the player has no squad.
    #[serde(rename = "squadID", default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub squad_id: Option<SquadId>,
    /// Squad display name; `null` when the player has no named squad.
    #[serde(rename = "squadName")]
    pub squad_name: Option<String>,
    /// Whether the player leads their squad.
    #[serde(rename = "isLeader")]
    pub is_leader: bool,
    /// Current kit/role identifier.
    pub role: String,
}

/// One recorded wound, with both parties frozen as they were at the time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WoundEvent {
    /// Epoch milliseconds at which the wound happened.
    #[ts(type = "number")]
    pub time: i64,
    /// The damaging player.
    pub attacker: PlayerView,
    /// The damaged player.
    pub victim: PlayerView,
    /// Damage dealt.
    pub damage: f64,
    /// Weapon identifier.
    pub weapon: String,
    /// Whether attacker and victim were on the same team.
    pub teamkill: bool,
    /// Whether the attacker wounded themselves.
    pub suicide: bool,
}
