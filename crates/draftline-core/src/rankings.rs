// Rankings data loading.
//
// Reads a flat CSV of ranked players (player_id, name, position, team,
// rank_value). File order is kept; it breaks ties between equal ranks.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::draft::player::{Player, Position};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RankingsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// One rankings row. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct RawRanking {
    #[serde(default)]
    player_id: Option<String>,
    name: String,
    #[serde(default)]
    position: String,
    #[serde(default)]
    team: String,
    #[serde(alias = "rank")]
    rank_value: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Clean up a raw id cell. Placeholder values become `None`, and integer
/// ids that went through a float column ("4046.0") lose the fraction.
fn normalize_player_id(raw: Option<&str>) -> Option<String> {
    let id = raw?.trim();
    if id.is_empty() {
        return None;
    }
    let lowered = id.to_ascii_lowercase();
    if matches!(lowered.as_str(), "nan" | "none" | "null") {
        return None;
    }
    if let Some(int_part) = id.strip_suffix(".0") {
        if !int_part.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Some(int_part.to_string());
        }
    }
    Some(id.to_string())
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_rankings_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut players = Vec::new();
    for (index, result) in reader.deserialize::<RawRanking>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        match result {
            Ok(raw) => {
                let name = raw.name.trim();
                if name.is_empty() {
                    warn!("skipping rankings line {}: empty name", line);
                    continue;
                }
                if !raw.rank_value.is_finite() {
                    warn!("skipping '{}' (line {}): non-finite rank", name, line);
                    continue;
                }
                players.push(Player {
                    id: normalize_player_id(raw.player_id.as_deref()),
                    name: name.to_string(),
                    position: Position::parse_lenient(&raw.position),
                    team: raw.team.trim().to_string(),
                    rank_value: raw.rank_value,
                });
            }
            Err(e) => {
                warn!("skipping malformed rankings line {}: {}", line, e);
            }
        }
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loader
// ---------------------------------------------------------------------------

/// Load the ranking pool from a CSV file. An empty result is an error.
pub fn load_rankings(path: &Path) -> Result<Vec<Player>, RankingsError> {
    let file = std::fs::File::open(path).map_err(|e| RankingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_rankings_from_reader(file).map_err(|e| RankingsError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if players.is_empty() {
        return Err(RankingsError::Validation(format!(
            "{} produced zero valid rows",
            path.display()
        )));
    }

    let without_id = players.iter().filter(|p| p.id.is_none()).count();
    info!(
        "loaded {} ranked players from {} ({} without a player id)",
        players.len(),
        path.display(),
        without_id
    );
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
