// Top-N recommendations with human-readable reasoning.

use std::fmt::Write as _;

use crate::draft::player::{Player, Position};

use super::metrics::PositionMetrics;
use super::scoring::ScoreScale;

/// Recommendations returned when no count is configured.
pub const DEFAULT_TOP_N: usize = 5;
/// The dashboard never shows more than this many recommendations.
pub const MAX_DISPLAYED: usize = 6;

/// A recommended player with its recommendation-scale score.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub player: Player,
    pub score: f64,
    pub reasoning: String,
}

/// Score every available player, sort descending (stable, so ties keep pool
/// order) and keep the best `top_n`.
///
/// `pool` is expected in ascending rank order, as produced by
/// `available_pool`.
pub fn recommend(pool: &[Player], metrics: &PositionMetrics, top_n: usize) -> Vec<Recommendation> {
    let mut scored: Vec<(&Player, f64)> = pool
        .iter()
        .map(|p| (p, ScoreScale::Recommendation.score(p, metrics)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(top_n)
        .map(|(player, score)| Recommendation {
            player: player.clone(),
            score,
            reasoning: reasoning(player, metrics),
        })
        .collect()
}

/// Explain a recommendation in terms of rank and roster state.
pub fn reasoning(player: &Player, metrics: &PositionMetrics) -> String {
    let mut text = format!("Ranked #{} overall. ", player.display_rank());
    let pos = player.position;

    if let Some(need) = metrics.need(pos) {
        if need.needed > 0 {
            let _ = write!(
                text,
                "You need {} more {pos}(s). Currently have {}/{} {pos}s.",
                need.needed, need.drafted, need.required
            );
        } else {
            let _ = write!(
                text,
                "You've filled your {pos} requirement ({}/{}).",
                need.drafted, need.required
            );
        }
    } else if matches!(pos, Position::RunningBack | Position::WideReceiver) {
        let ratio = metrics.rb_wr_ratio;
        let _ = write!(
            text,
            "Current RB/WR ratio: {}/{} = ",
            metrics.rb_drafted, metrics.wr_drafted
        );
        if metrics.wr_drafted == 0 {
            text.push_str("∞ (no WRs yet). ");
        } else {
            let _ = write!(text, "{ratio:.1}. ");
        }

        if pos == Position::WideReceiver && ratio > 1.0 {
            text.push_str("Need more WRs to balance roster.");
        } else if pos == Position::RunningBack && ratio < 1.0 {
            text.push_str("Need more RBs to balance roster.");
        } else {
            text.push_str("Maintains good position balance.");
        }
    }

    text.trim_end().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
