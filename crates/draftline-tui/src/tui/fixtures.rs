// Snapshot builders shared by the widget tests.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};

use draftline_core::board::{BoardParams, DraftBoard};
use draftline_core::cache::Freshness;
use draftline_core::draft::order::TurnStatus;
use draftline_core::draft::pick::Pick;
use draftline_core::draft::player::{Player, Position};
use draftline_core::recommend::metrics::RosterRequirements;

use crate::protocol::DashboardSnapshot;

pub(crate) fn player(id: &str, name: &str, position: Position, team: &str, rank: f64) -> Player {
    Player {
        id: Some(id.to_string()),
        name: name.to_string(),
        position,
        team: team.to_string(),
        rank_value: rank,
    }
}

pub(crate) fn pool() -> Vec<Player> {
    vec![
        player("10", "Bijan Robinson", Position::RunningBack, "ATL", 1.0),
        player("11", "Ja'Marr Chase", Position::WideReceiver, "CIN", 2.0),
        player("12", "Josh Allen", Position::Quarterback, "BUF", 3.0),
        player("13", "Brock Bowers", Position::TightEnd, "LV", 4.0),
        player("14", "Puka Nacua", Position::WideReceiver, "LAR", 5.0),
        player("15", "Jahmyr Gibbs", Position::RunningBack, "DET", 6.0),
        player("16", "Lamar Jackson", Position::Quarterback, "BAL", 7.0),
        player("17", "Justin Tucker", Position::Kicker, "BAL", 8.0),
    ]
}

fn pick(pick_no: u32, by: &str, player_id: &str) -> Pick {
    Pick {
        pick_no,
        round: 1,
        drafted_by: by.to_string(),
        player_id: Some(player_id.to_string()),
    }
}

pub(crate) fn board_with_picks() -> DraftBoard {
    let picks = vec![pick(1, "rival", "10"), pick(2, "me", "12"), pick(3, "rival", "99")];
    let names: HashMap<String, String> = [("rival".to_string(), "Rival GM".to_string())]
        .into_iter()
        .collect();
    let requirements = RosterRequirements::standard();
    let params = BoardParams {
        user_id: "me",
        requirements: &requirements,
        top_n: 5,
    };
    DraftBoard::compute(&pool(), &picks, &names, &params)
}

pub(crate) fn empty_snapshot() -> DashboardSnapshot {
    let requirements = RosterRequirements::standard();
    let params = BoardParams {
        user_id: "me",
        requirements: &requirements,
        top_n: 5,
    };
    DashboardSnapshot {
        league_name: "Test League".into(),
        draft_status: Some("pre_draft".into()),
        picks_made: 0,
        total_picks: 180,
        round: Some(1),
        turn: TurnStatus::PicksAway(3),
        freshness: Freshness::Fresh,
        board: DraftBoard::compute(&[], &[], &HashMap::new(), &params),
        updated_at: Utc.with_ymd_and_hms(2026, 9, 1, 19, 30, 0).unwrap(),
    }
}

pub(crate) fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        draft_status: Some("drafting".into()),
        picks_made: 3,
        turn: TurnStatus::OnTheClock,
        board: board_with_picks(),
        ..empty_snapshot()
    }
}

/// Render output flattened to one string (rows joined by newlines).
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
