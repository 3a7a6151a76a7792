// End-to-end tests over the public core API: load a rankings file, replay a
// small snake draft, and check turn tracking and the recomputed board.

use std::collections::HashMap;
use std::path::Path;

use draftline_core::board::{BoardParams, DraftBoard};
use draftline_core::draft::order::{picks_until_user_turn, turn_for_owner, DraftConfig, TurnStatus};
use draftline_core::draft::pick::Pick;
use draftline_core::draft::player::{Player, Position};
use draftline_core::rankings::load_rankings;
use draftline_core::recommend::metrics::{RatioBalance, RosterRequirements};

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn rankings() -> Vec<Player> {
    load_rankings(&Path::new(FIXTURES).join("rankings.csv")).expect("fixture should load")
}

/// Four-team snake draft; "me" picks from slot 2.
fn four_team_snake() -> DraftConfig {
    DraftConfig {
        team_count: 4,
        total_rounds: 3,
        is_snake: true,
        slot_by_owner: HashMap::from([
            ("alice".to_string(), 1),
            ("me".to_string(), 2),
            ("carol".to_string(), 3),
            ("dave".to_string(), 4),
        ]),
    }
}

fn owner_for_slot(config: &DraftConfig, slot: u32) -> String {
    config
        .slot_by_owner
        .iter()
        .find(|(_, &s)| s == slot)
        .map(|(owner, _)| owner.clone())
        .unwrap()
}

/// Everyone drafts the best available player by rank.
fn replay(pool: &[Player], config: &DraftConfig, picks_to_make: u32) -> Vec<Pick> {
    let mut picks: Vec<Pick> = Vec::new();
    for cursor in 0..picks_to_make {
        let slot = config.slot_on_the_clock(cursor).unwrap();
        let available = draftline_core::draft::roster::available_pool(pool, &picks);
        let best = available
            .iter()
            .find(|p| p.id.is_some())
            .expect("pool exhausted");
        picks.push(Pick {
            pick_no: cursor + 1,
            round: config.current_round(cursor).unwrap(),
            drafted_by: owner_for_slot(config, slot),
            player_id: best.id.clone(),
        });
    }
    picks
}

#[test]
fn fixture_loads_with_bad_rows_skipped() {
    let pool = rankings();
    assert_eq!(pool.len(), 15);
    let lamar = pool.iter().find(|p| p.name == "Lamar Jackson").unwrap();
    assert_eq!(lamar.id.as_deref(), Some("4881"));
    let rookie = pool.iter().find(|p| p.name == "Incoming Rookie WR").unwrap();
    assert!(rookie.id.is_none());
}

#[test]
fn turn_tracking_through_a_snake_draft() {
    let config = four_team_snake();
    // Order: 1 2 3 4 | 4 3 2 1 | 1 2 3 4
    let expected = [
        TurnStatus::PicksAway(1),
        TurnStatus::OnTheClock,
        TurnStatus::PicksAway(4),
        TurnStatus::PicksAway(3),
        TurnStatus::PicksAway(2),
        TurnStatus::PicksAway(1),
        TurnStatus::OnTheClock,
        TurnStatus::PicksAway(2),
        TurnStatus::PicksAway(1),
        TurnStatus::OnTheClock,
        TurnStatus::UserFinished,
        TurnStatus::UserFinished,
        TurnStatus::Complete,
    ];
    for (cursor, want) in expected.iter().enumerate() {
        assert_eq!(
            turn_for_owner(&config, cursor as u32, "me"),
            *want,
            "cursor {cursor}"
        );
    }
    assert_eq!(turn_for_owner(&config, 0, "stranger"), TurnStatus::Undetermined);
}

#[test]
fn ten_team_slot_one_after_first_pick() {
    let config = DraftConfig {
        team_count: 10,
        total_rounds: 15,
        is_snake: true,
        slot_by_owner: HashMap::new(),
    };
    assert_eq!(picks_until_user_turn(&config, 0, Some(1)), TurnStatus::OnTheClock);
    assert_eq!(picks_until_user_turn(&config, 1, Some(1)).as_code(), 18);
}

#[test]
fn board_after_replayed_picks() {
    let pool = rankings();
    let config = four_team_snake();
    let picks = replay(&pool, &config, 6);
    let reqs = RosterRequirements::standard();
    let params = BoardParams {
        user_id: "me",
        requirements: &reqs,
        top_n: 5,
    };
    let names = HashMap::from([("me".to_string(), "Me".to_string())]);
    let board = DraftBoard::compute(&pool, &picks, &names, &params);

    // Picks 1-6 go to slots 1 2 3 4 4 3, so "me" has only pick 2.
    assert_eq!(board.roster.len(), 1);
    assert_eq!(board.roster[0].player.name, "Bijan Robinson");
    assert_eq!(board.roster[0].player.position, Position::RunningBack);
    assert_eq!(board.metrics.rb_drafted, 1);
    assert_eq!(board.metrics.ratio_balance(), RatioBalance::Balanced);

    assert_eq!(board.available.len(), pool.len() - 6);
    assert_eq!(board.log.len(), 6);
    assert_eq!(board.log[0].pick_no, 6);
    assert!(board.log.iter().any(|e| e.is_user && e.drafted_by == "Me"));

    // Every recommendation is starred in the browse table.
    for rec in &board.recommendations {
        let row = board
            .browse
            .iter()
            .find(|r| r.player.key() == rec.player.key())
            .unwrap();
        assert!(row.starred);
    }

    let top = &board.recommendations[0];
    assert_eq!(top.player.name, "Jahmyr Gibbs");
    assert!(top.reasoning.starts_with("Ranked #7 overall."));
}

#[test]
fn filled_requirements_push_qbs_down() {
    let pool = rankings();
    let qbs: Vec<&Player> = pool
        .iter()
        .filter(|p| p.position == Position::Quarterback)
        .collect();
    let picks: Vec<Pick> = qbs
        .iter()
        .take(2)
        .enumerate()
        .map(|(i, p)| Pick {
            pick_no: i as u32 + 1,
            round: i as u32 + 1,
            drafted_by: "me".into(),
            player_id: p.id.clone(),
        })
        .collect();

    let reqs = RosterRequirements::standard();
    let params = BoardParams {
        user_id: "me",
        requirements: &reqs,
        top_n: 5,
    };
    let board = DraftBoard::compute(&pool, &picks, &HashMap::new(), &params);
    assert_eq!(board.metrics.need(Position::Quarterback).unwrap().needed, 0);
    assert!(board
        .recommendations
        .iter()
        .all(|r| r.player.position != Position::Quarterback));
}
