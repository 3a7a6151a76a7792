// Derived views over the ranking pool and the pick history: players still
// available, and the players the user has drafted.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::pick::Pick;
use super::player::Player;

/// A player on the user's roster, with when they were taken.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub player: Player,
    pub pick_no: u32,
    pub round: u32,
}

/// Players not yet drafted, sorted ascending by rank.
///
/// A player is drafted when their id appears as the `player_id` of some
/// pick. Players without an id can never be matched and stay available.
/// The sort is stable, so equal ranks keep pool order.
pub fn available_pool(pool: &[Player], picks: &[Pick]) -> Vec<Player> {
    let drafted: HashSet<&str> = picks.iter().filter_map(Pick::player_id).collect();

    let mut available: Vec<Player> = pool
        .iter()
        .filter(|p| match p.id.as_deref() {
            Some(id) => !drafted.contains(id),
            None => true,
        })
        .cloned()
        .collect();
    sort_by_rank(&mut available);
    available
}

/// The user's drafted players, joined to the pool and sorted by position
/// then rank.
///
/// Picks whose player id is missing or not in the pool contribute nothing.
pub fn user_roster(pool: &[Player], picks: &[Pick], user_id: &str) -> Vec<RosterEntry> {
    let by_id = index_by_id(pool);

    let mut roster: Vec<RosterEntry> = picks
        .iter()
        .filter(|pick| pick.drafted_by == user_id)
        .filter_map(|pick| {
            let player = pick.player_id().and_then(|id| by_id.get(id).copied());
            if player.is_none() {
                debug!(
                    "pick #{} by {} has no matching player (id {:?})",
                    pick.pick_no, user_id, pick.player_id
                );
            }
            player.map(|player| RosterEntry {
                player: player.clone(),
                pick_no: pick.pick_no,
                round: pick.round,
            })
        })
        .collect();

    roster.sort_by(|a, b| {
        a.player
            .position
            .sort_order()
            .cmp(&b.player.position.sort_order())
            .then(a.player.rank_value.total_cmp(&b.player.rank_value))
    });
    roster
}

/// Stable sort by ascending rank value.
pub fn sort_by_rank(players: &mut [Player]) {
    players.sort_by(|a, b| a.rank_value.total_cmp(&b.rank_value));
}

/// Map of player id -> player. When two rows share an id the first wins.
pub fn index_by_id(pool: &[Player]) -> HashMap<&str, &Player> {
    let mut map = HashMap::with_capacity(pool.len());
    for player in pool {
        if let Some(id) = player.id.as_deref() {
            map.entry(id).or_insert(player);
        }
    }
    map
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
