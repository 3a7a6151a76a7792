// Individual pick representation.

use serde::{Deserialize, Serialize};

/// A single draft pick record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    /// Global pick sequence number (1-indexed).
    pub pick_no: u32,
    /// Round number (1-indexed).
    pub round: u32,
    /// Owner (user) identifier of the drafter.
    pub drafted_by: String,
    /// Platform id of the drafted player, if reported.
    pub player_id: Option<String>,
}

impl Pick {
    /// The drafted player's id, treating an empty string as absent.
    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Order picks by `pick_no`. Stable, so duplicates keep their reported order.
pub fn sort_in_draft_order(picks: &mut [Pick]) {
    picks.sort_by_key(|p| p.pick_no);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(pick_no: u32, player_id: Option<&str>) -> Pick {
        Pick {
            pick_no,
            round: 1,
            drafted_by: "user_1".to_string(),
            player_id: player_id.map(str::to_string),
        }
    }

    #[test]
    fn player_id_empty_is_none() {
        assert_eq!(pick(1, Some("")).player_id(), None);
        assert_eq!(pick(1, None).player_id(), None);
        assert_eq!(pick(1, Some("4046")).player_id(), Some("4046"));
    }

    #[test]
    fn sort_in_draft_order_orders_by_pick_no() {
        let mut picks = vec![pick(3, Some("c")), pick(1, Some("a")), pick(2, Some("b"))];
        sort_in_draft_order(&mut picks);
        let order: Vec<u32> = picks.iter().map(|p| p.pick_no).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn sort_in_draft_order_is_stable_for_duplicates() {
        let mut picks = vec![pick(2, Some("x")), pick(1, Some("a")), pick(2, Some("y"))];
        sort_in_draft_order(&mut picks);
        let ids: Vec<_> = picks.iter().map(|p| p.player_id().unwrap()).collect();
        assert_eq!(ids, vec!["a", "x", "y"]);
    }
}
