// Wire models for the Sleeper REST API.
//
// Only the fields the assistant reads are declared; everything else in the
// payloads is ignored. Sleeper sends `null` for many fields before a draft
// starts, so most of them are optional.

use std::collections::HashMap;

use serde::Deserialize;

use draftline_core::draft::pick::Pick;

/// `GET /league/{league_id}` and the entries of
/// `GET /user/{user_id}/leagues/nfl/{season}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default)]
    pub draft_id: Option<String>,
}

impl League {
    pub fn draft_id(&self) -> Option<&str> {
        self.draft_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.league_id)
    }
}

/// `GET /draft/{draft_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Draft {
    pub draft_id: String,
    /// "snake", "linear" or "auction".
    #[serde(default, rename = "type")]
    pub draft_type: Option<String>,
    /// "pre_draft", "drafting", "paused" or "complete".
    #[serde(default)]
    pub status: Option<String>,
    /// user_id -> slot.
    #[serde(default)]
    pub draft_order: Option<HashMap<String, u32>>,
    /// slot (as a string key) -> roster_id. Unfilled slots are `null`.
    #[serde(default)]
    pub slot_to_roster_id: Option<HashMap<String, Option<u32>>>,
    #[serde(default)]
    pub settings: Option<DraftSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DraftSettings {
    #[serde(default)]
    pub rounds: Option<u32>,
    /// Numeric draft type; 2 is snake.
    #[serde(default, rename = "type")]
    pub draft_type: Option<serde_json::Value>,
}

/// One entry of `GET /draft/{draft_id}/picks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DraftPickRecord {
    pub pick_no: u32,
    pub round: u32,
    #[serde(default)]
    pub picked_by: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default)]
    pub draft_slot: Option<u32>,
}

impl DraftPickRecord {
    pub fn to_pick(&self) -> Pick {
        Pick {
            pick_no: self.pick_no,
            round: self.round,
            drafted_by: self.picked_by.clone().unwrap_or_default(),
            player_id: self.player_id.clone().filter(|id| !id.is_empty()),
        }
    }
}

/// `GET /draft/{draft_id}/state`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DraftState {
    /// User id of whoever is on the clock.
    #[serde(default)]
    pub current_player: Option<String>,
}

/// One entry of `GET /league/{league_id}/rosters`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    /// `null` for rosters nobody has claimed.
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// One entry of `GET /league/{league_id}/users`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeagueUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `GET /user/{username}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Map of user id -> display name. Users without a display name map to
/// their id.
pub fn display_names(users: &[LeagueUser]) -> HashMap<String, String> {
    users
        .iter()
        .map(|u| {
            let name = u
                .display_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or(&u.user_id);
            (u.user_id.clone(), name.to_string())
        })
        .collect()
}
