//! Player and squad-leader listings over the live roster.
//!
//! Views are recomputed from the roster on every call; nothing is cached.

use squadfeed_types::{Player, PlayerView};

use crate::projector::project;

/// Project every player in roster order.
pub fn players(roster: &[Player]) -> Vec<PlayerView> {
    roster.iter().map(project).collect()
}

/// Project the squad leaders, ordered by squad id.
///
/// The sort is stable, so leaders sharing a squad id (one per team) keep
/// their roster order. A leader without a squad id sorts first.
pub fn leaders(roster: &[Player]) -> Vec<PlayerView> {
    let mut leaders: Vec<PlayerView> = roster
        .iter()
        .filter(|player| player.is_leader)
        .map(project)
        .collect();
    leaders.sort_by_key(|leader| leader.squad_id);
    leaders
}
