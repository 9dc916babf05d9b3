//! Live entities delivered by the game-session connector.
//!
//! The connector speaks camelCase JSON (`playerID`, `steamID`, ...). Any
//! field the connector could not resolve is modelled as an [`Option`] so a
//! partially-known player still deserializes; deciding whether such a
//! player is usable is left to the consumer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PlayerId, SquadId, SteamId, TeamId};

/// A squad as currently known to the game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    /// Squad identifier within its team.
    #[serde(rename = "squadID")]
    pub squad_id: SquadId,
    /// Display name chosen by the squad leader.
    #[serde(rename = "squadName", default)]
    pub squad_name: String,
}

/// A connected player, exactly as the connector last reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// In-game display name.
    pub name: String,
    /// In-game slot identifier.
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,
    /// Platform identity, absent while the connector is still resolving it.
    #[serde(rename = "steamID", default)]
    pub steam_id: Option<SteamId>,
    /// Team the player is on.
    #[serde(rename = "teamID")]
    pub team_id: TeamId,
    /// Squad the player belongs to, if any.
    #[serde(rename = "squadID", default)]
    pub squad_id: Option<SquadId>,
    /// Resolved squad record, if the player is in a squad the server knows.
    #[serde(default)]
    pub squad: Option<Squad>,
    /// Whether the player leads their squad.
    #[serde(rename = "isLeader", default)]
    pub is_leader: bool,
    /// Current kit/role identifier.
    #[serde(default)]
    pub role: String,
}

impl Player {
    /// The player's platform identity, if it is usable for attribution.
    pub fn resolved_steam_id(&self) -> Option<&SteamId> {
        self.steam_id.as_ref().filter(|id| id.is_resolvable())
    }
}

/// A "player wounded" notification from the connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoundNotification {
    /// When the wound happened.
    pub time: DateTime<Utc>,
    /// The damaging player. Absent for environmental damage.
    #[serde(default)]
    pub attacker: Option<Player>,
    /// The damaged player.
    #[serde(default)]
    pub victim: Option<Player>,
    /// Damage dealt.
    pub damage: f64,
    /// Weapon identifier as reported by the game log.
    pub weapon: String,
    /// Whether attacker and victim are on the same team.
    #[serde(default)]
    pub teamkill: bool,
}
