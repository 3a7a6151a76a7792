// One refresh cycle's worth of derived draft state, recomputed from scratch
// from the ranking pool and the pick list.

use std::collections::HashMap;

use crate::draft::pick::{sort_in_draft_order, Pick};
use crate::draft::player::{Player, Position};
use crate::draft::roster::{available_pool, index_by_id, user_roster, RosterEntry};
use crate::recommend::browse::{browse_table, BrowseRow};
use crate::recommend::engine::{recommend, Recommendation};
use crate::recommend::metrics::{compute_position_metrics, PositionMetrics, RosterRequirements};

/// One row of the draft log.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLogEntry {
    pub pick_no: u32,
    pub round: u32,
    /// Player name, or the raw id when the player is not in the pool.
    pub player_name: String,
    pub position: Option<Position>,
    pub team: Option<String>,
    /// Display name of the drafter, falling back to the owner id.
    pub drafted_by: String,
    pub is_user: bool,
}

/// Inputs shared by every board computation in a session.
#[derive(Debug, Clone)]
pub struct BoardParams<'a> {
    pub user_id: &'a str,
    pub requirements: &'a RosterRequirements,
    pub top_n: usize,
}

/// Everything the dashboard shows about the pool and the user's roster.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBoard {
    pub available: Vec<Player>,
    pub roster: Vec<RosterEntry>,
    pub metrics: PositionMetrics,
    pub recommendations: Vec<Recommendation>,
    pub browse: Vec<BrowseRow>,
    /// Most recent pick first.
    pub log: Vec<DraftLogEntry>,
}

impl DraftBoard {
    pub fn compute(
        pool: &[Player],
        picks: &[Pick],
        owner_names: &HashMap<String, String>,
        params: &BoardParams<'_>,
    ) -> Self {
        let mut ordered = picks.to_vec();
        sort_in_draft_order(&mut ordered);

        let available = available_pool(pool, &ordered);
        let roster = user_roster(pool, &ordered, params.user_id);
        let metrics = compute_position_metrics(&roster, params.requirements);
        let recommendations = recommend(&available, &metrics, params.top_n);
        let browse = browse_table(&available, &metrics, &recommendations);
        let log = draft_log(pool, &ordered, owner_names, params.user_id);

        DraftBoard {
            available,
            roster,
            metrics,
            recommendations,
            browse,
            log,
        }
    }
}

/// Picks joined to the pool and owner names, newest first.
pub fn draft_log(
    pool: &[Player],
    picks: &[Pick],
    owner_names: &HashMap<String, String>,
    user_id: &str,
) -> Vec<DraftLogEntry> {
    let by_id = index_by_id(pool);

    let mut log: Vec<DraftLogEntry> = picks
        .iter()
        .map(|pick| {
            let player = pick.player_id().and_then(|id| by_id.get(id).copied());
            let player_name = match (player, pick.player_id()) {
                (Some(p), _) => p.name.clone(),
                (None, Some(id)) => format!("Unknown ({id})"),
                (None, None) => "Unknown".to_string(),
            };
            DraftLogEntry {
                pick_no: pick.pick_no,
                round: pick.round,
                player_name,
                position: player.map(|p| p.position),
                team: player.map(|p| p.team.clone()),
                drafted_by: owner_names
                    .get(&pick.drafted_by)
                    .cloned()
                    .unwrap_or_else(|| pick.drafted_by.clone()),
                is_user: pick.drafted_by == user_id,
            }
        })
        .collect();
    log.sort_by(|a, b| b.pick_no.cmp(&a.pick_no));
    log
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
