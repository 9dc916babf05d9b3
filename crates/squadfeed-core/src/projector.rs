//! Projection of live players into the dashboard shape.
//!
//! The same projection is used for roster listings and for freezing the
//! attacker and victim of a wound, so a recorded wound keeps the squad and
//! role the players had at that moment even if they change later.

use squadfeed_types::{Player, PlayerView};

/// Project a live player into its wire representation.
///
/// A player whose squad has no name (or is not resolved) projects to a
/// `null` squad name.
pub fn project(player: &Player) -> PlayerView {
    PlayerView {
        name: player.name.clone(),
        player_id: player.player_id,
        steam_id: player.steam_id.clone(),
        team_id: player.team_id,
        squad_id: player.squad_id,
        squad_name: player
            .squad
            .as_ref()
            .map(|squad| squad.squad_name.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_owned),
        is_leader: player.is_leader,
        role: player.role.clone(),
    }
}

#[cfg(test)]
mod tests {
    use squadfeed_types::{PlayerId, Squad, SquadId, SteamId, TeamId};

    use super::*;

    fn player(squad: Option<Squad>) -> Player {
        Player {
            name: String::from("Ranger"),
            player_id: PlayerId(12),
            steam_id: Some(SteamId::from("76561198000000012")),
            team_id: TeamId(2),
            squad_id: squad.as_ref().map(|s| s.squad_id),
            squad,
            is_leader: true,
            role: String::from("RUS_SL_01"),
        }
    }

    #[test]
    fn project_copies_identity_fields() {
        let view = project(&player(None));
        assert_eq!(view.name, "Ranger");
        assert_eq!(view.player_id, PlayerId(12));
        assert_eq!(view.steam_id, Some(SteamId::from("76561198000000012")));
        assert_eq!(view.team_id, TeamId(2));
        assert!(view.is_leader);
        assert_eq!(view.role, "RUS_SL_01");
    }

    #[test]
    fn project_without_squad_has_null_squad_name() {
        let view = project(&player(None));
        assert_eq!(view.squad_id, None);
        assert_eq!(view.squad_name, None);
    }

    #[test]
    fn project_with_squad_carries_live_name() {
        let view = project(&player(Some(Squad {
            squad_id: SquadId(3),
            squad_name: String::from("ARMOR"),
        })));
        assert_eq!(view.squad_id, Some(SquadId(3)));
        assert_eq!(view.squad_name.as_deref(), Some("ARMOR"));
    }

    #[test]
    fn project_with_unnamed_squad_has_null_squad_name() {
        let view = project(&player(Some(Squad {
            squad_id: SquadId(3),
            squad_name: String::new(),
        })));
        assert_eq!(view.squad_id, Some(SquadId(3)));
        assert_eq!(view.squad_name, None);
    }
}
