// The full available-players table, scored on the browse scale and starred
// where a player is also a current recommendation.

use std::collections::HashSet;

use crate::draft::player::{Player, PlayerKey};

use super::engine::Recommendation;
use super::metrics::PositionMetrics;
use super::scoring::ScoreScale;

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseRow {
    pub player: Player,
    pub score: f64,
    /// Whether the player is in the top recommendations of the same snapshot.
    pub starred: bool,
}

/// Keys of the recommended players.
pub fn starred_keys(recommendations: &[Recommendation]) -> HashSet<PlayerKey> {
    recommendations.iter().map(|r| r.player.key()).collect()
}

/// Score the whole pool on the browse scale and sort descending. The sort
/// is stable, so equal scores keep pool order.
pub fn browse_table(
    pool: &[Player],
    metrics: &PositionMetrics,
    recommendations: &[Recommendation],
) -> Vec<BrowseRow> {
    let starred = starred_keys(recommendations);

    let mut rows: Vec<BrowseRow> = pool
        .iter()
        .map(|player| BrowseRow {
            score: ScoreScale::Browse.score(player, metrics),
            starred: starred.contains(&player.key()),
            player: player.clone(),
        })
        .collect();
    rows.sort_by(|a, b| b.score.total_cmp(&a.score));
    rows
}
