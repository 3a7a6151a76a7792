// Ranked player records and football positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Football positions as they appear in rankings data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Kicker,
    Defense,
    /// Anything else (IDP positions, unknown labels).
    Other,
}

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// Accepts the usual abbreviations case-insensitively:
    /// - "PK" is a Kicker
    /// - "DST", "D/ST" and "DEF" are all Defense
    ///
    /// Returns `None` for labels that are not one of the known positions.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" | "PK" => Some(Position::Kicker),
            "DEF" | "DST" | "D/ST" => Some(Position::Defense),
            _ => None,
        }
    }

    /// Like `from_str_pos`, but maps unknown labels to `Other`.
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str_pos(s).unwrap_or(Position::Other)
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DEF",
            Position::Other => "OTH",
        }
    }

    /// Deterministic ordering index for roster display.
    pub fn sort_order(&self) -> u8 {
        match self {
            Position::Quarterback => 0,
            Position::RunningBack => 1,
            Position::WideReceiver => 2,
            Position::TightEnd => 3,
            Position::Kicker => 4,
            Position::Defense => 5,
            Position::Other => 6,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A ranked player from the rankings pool. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Platform player identifier. `None` when the rankings row has no
    /// usable id, in which case the player can never be matched to a pick.
    pub id: Option<String>,
    pub name: String,
    pub position: Position,
    pub team: String,
    /// Overall rank; lower is better.
    pub rank_value: f64,
}

impl Player {
    /// Identity used to match this player across views of the same snapshot.
    pub fn key(&self) -> PlayerKey {
        PlayerKey::for_player(self)
    }

    /// Whole-number rank for display ("Ranked #12 overall").
    pub fn display_rank(&self) -> i64 {
        self.rank_value.trunc() as i64
    }
}

/// Identity of a player within one snapshot.
///
/// Players with an id are keyed by it. Players without one fall back to
/// their name; the separate variant keeps a name key from ever matching an
/// id key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerKey {
    Id(String),
    Name(String),
}

impl PlayerKey {
    pub fn for_player(player: &Player) -> Self {
        match player.id.as_deref() {
            Some(id) if !id.is_empty() => PlayerKey::Id(id.to_string()),
            _ => PlayerKey::Name(player.name.clone()),
        }
    }
}
