// Position-aware player scoring.
//
// Two scales share the same multiplier rules but use different base scores.
// Scores are only comparable within one scale.

use crate::draft::player::{Player, Position};

use super::metrics::{PositionMetrics, BALANCED_RATIO_MAX, BALANCED_RATIO_MIN};

/// Multiplier applied to a required position whose minimum is already met.
pub const SATURATED_MULTIPLIER: f64 = 0.1;
/// Floor on the ratio when boosting RBs, so a near-zero ratio stays bounded.
pub const MIN_RB_BOOST_RATIO: f64 = 0.1;

/// Which base-score formula to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScale {
    /// `1000 - rank`, used for the top recommendations.
    Recommendation,
    /// `2000 - 2 * rank`, used for the available-players table.
    Browse,
}

impl ScoreScale {
    pub fn base_score(self, rank_value: f64) -> f64 {
        match self {
            ScoreScale::Recommendation => 1000.0 - rank_value,
            ScoreScale::Browse => 2000.0 - rank_value * 2.0,
        }
    }

    pub fn score(self, player: &Player, metrics: &PositionMetrics) -> f64 {
        self.base_score(player.rank_value) * position_multiplier(player.position, metrics)
    }
}

/// Multiplier for a candidate at `position` given the current roster.
///
/// Required positions (QB and TE under the standard policy) drop to
/// `SATURATED_MULTIPLIER` once filled. WRs are boosted by the ratio when the
/// roster is RB-heavy; RBs are boosted by its inverse when WR-heavy.
pub fn position_multiplier(position: Position, metrics: &PositionMetrics) -> f64 {
    if let Some(need) = metrics.need(position) {
        return if need.needed == 0 {
            SATURATED_MULTIPLIER
        } else {
            1.0
        };
    }

    let ratio = metrics.rb_wr_ratio;
    match position {
        Position::WideReceiver if ratio > BALANCED_RATIO_MAX => ratio,
        Position::RunningBack if ratio < BALANCED_RATIO_MIN => {
            1.0 / ratio.max(MIN_RB_BOOST_RATIO)
        }
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::roster::RosterEntry;
    use crate::recommend::metrics::{compute_position_metrics, RosterRequirements};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn player(position: Position, rank: f64) -> Player {
        Player {
            id: Some(format!("{position}-{rank}")),
            name: format!("{position} at {rank}"),
            position,
            team: "TST".into(),
            rank_value: rank,
        }
    }

    fn metrics_for(positions: &[Position]) -> PositionMetrics {
        let roster: Vec<RosterEntry> = positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| RosterEntry {
                player: player(pos, i as f64 + 1.0),
                pick_no: i as u32 + 1,
                round: i as u32 + 1,
            })
            .collect();
        compute_position_metrics(&roster, &RosterRequirements::standard())
    }

    #[test]
    fn base_scores() {
        assert!(approx_eq(ScoreScale::Recommendation.base_score(1.0), 999.0));
        assert!(approx_eq(ScoreScale::Browse.base_score(1.0), 1998.0));
        assert!(approx_eq(ScoreScale::Recommendation.base_score(1500.0), -500.0));
    }

    #[test]
    fn neutral_roster_has_unit_multipliers() {
        let m = metrics_for(&[]);
        for pos in [
            Position::Quarterback,
            Position::RunningBack,
            Position::WideReceiver,
            Position::TightEnd,
            Position::Kicker,
            Position::Other,
        ] {
            assert!(approx_eq(position_multiplier(pos, &m), 1.0), "{pos}");
        }
    }

    #[test]
    fn filled_qb_is_dampened() {
        let m = metrics_for(&[Position::Quarterback, Position::Quarterback]);
        assert!(approx_eq(position_multiplier(Position::Quarterback, &m), 0.1));
        let s = ScoreScale::Recommendation.score(&player(Position::Quarterback, 10.0), &m);
        assert!(approx_eq(s, 99.0));
    }

    #[test]
    fn filled_te_is_dampened_but_positive() {
        let m = metrics_for(&[Position::TightEnd]);
        let s = ScoreScale::Browse.score(&player(Position::TightEnd, 5.0), &m);
        assert!(approx_eq(s, 199.0));
        assert!(s > 0.0);
    }

    #[test]
    fn rb_heavy_roster_boosts_wrs() {
        // 4 RB / 1 WR -> ratio 4.0
        let mut positions = vec![Position::RunningBack; 4];
        positions.push(Position::WideReceiver);
        let m = metrics_for(&positions);
        assert!(approx_eq(position_multiplier(Position::WideReceiver, &m), 4.0));
        assert!(approx_eq(position_multiplier(Position::RunningBack, &m), 1.0));
    }

    #[test]
    fn no_wr_sentinel_boosts_wrs_by_two() {
        let m = metrics_for(&[Position::RunningBack; 4]);
        assert!(approx_eq(position_multiplier(Position::WideReceiver, &m), 2.0));
    }

    #[test]
    fn wr_heavy_roster_boosts_rbs() {
        let mut positions = vec![Position::RunningBack; 2];
        positions.extend(vec![Position::WideReceiver; 8]);
        let m = metrics_for(&positions);
        assert!(approx_eq(position_multiplier(Position::RunningBack, &m), 4.0));
        assert!(approx_eq(position_multiplier(Position::WideReceiver, &m), 1.0));
    }

    #[test]
    fn rb_boost_is_clamped_at_zero_ratio() {
        let m = metrics_for(&[Position::WideReceiver; 4]);
        assert!(approx_eq(m.rb_wr_ratio, 0.0));
        assert!(approx_eq(position_multiplier(Position::RunningBack, &m), 10.0));
    }

    #[test]
    fn window_edges_do_not_boost() {
        // 13 RB / 10 WR = 1.3, 7 RB / 10 WR = 0.7
        let mut at_max = vec![Position::RunningBack; 13];
        at_max.extend(vec![Position::WideReceiver; 10]);
        let m = metrics_for(&at_max);
        assert!(approx_eq(position_multiplier(Position::WideReceiver, &m), 1.0));

        let mut at_min = vec![Position::RunningBack; 7];
        at_min.extend(vec![Position::WideReceiver; 10]);
        let m = metrics_for(&at_min);
        assert!(approx_eq(position_multiplier(Position::RunningBack, &m), 1.0));
    }

    #[test]
    fn scales_order_players_the_same_way() {
        let m = metrics_for(&[Position::Quarterback, Position::Quarterback]);
        let a = player(Position::WideReceiver, 30.0);
        let b = player(Position::Quarterback, 3.0);
        let rec =
            ScoreScale::Recommendation.score(&a, &m) > ScoreScale::Recommendation.score(&b, &m);
        let browse = ScoreScale::Browse.score(&a, &m) > ScoreScale::Browse.score(&b, &m);
        assert!(rec);
        assert!(browse);
    }
}
