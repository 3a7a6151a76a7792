// Build a `DraftConfig` from Sleeper league, draft and roster payloads.
//
// Pure: the tracker does the fetching and passes in whatever it got.

use std::collections::HashMap;

use draftline_core::draft::order::{resolve_team_count, DraftConfig, DEFAULT_TOTAL_ROUNDS};

use crate::models::{Draft, League, Roster};

/// `settings.type` value Sleeper uses for snake drafts.
const SNAKE_SETTINGS_TYPE: u64 = 2;

pub fn is_snake(draft: &Draft) -> bool {
    let by_name = draft
        .draft_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("snake"));
    let by_setting = draft
        .settings
        .as_ref()
        .and_then(|s| s.draft_type.as_ref())
        .and_then(|v| v.as_u64())
        == Some(SNAKE_SETTINGS_TYPE);
    by_name || by_setting
}

pub fn total_rounds(draft: &Draft) -> u32 {
    draft
        .settings
        .as_ref()
        .and_then(|s| s.rounds)
        .filter(|&r| r > 0)
        .unwrap_or(DEFAULT_TOTAL_ROUNDS)
}

fn non_empty_len<V>(map: Option<&HashMap<String, V>>) -> Option<usize> {
    map.map(HashMap::len).filter(|&n| n > 0)
}

/// Team count from the slot mapping, then the draft order, then the
/// league's roster count, then the default.
pub fn team_count(draft: Option<&Draft>, league: Option<&League>) -> u32 {
    resolve_team_count(
        non_empty_len(draft.and_then(|d| d.slot_to_roster_id.as_ref())),
        non_empty_len(draft.and_then(|d| d.draft_order.as_ref())),
        league.and_then(|l| l.total_rosters),
    )
}

/// Whether the draft reports any slot assignment at all.
pub fn has_slot_information(draft: &Draft) -> bool {
    non_empty_len(draft.draft_order.as_ref()).is_some()
        || non_empty_len(draft.slot_to_roster_id.as_ref()).is_some()
}

/// Whether `user_id` appears in the draft's user -> slot order.
pub fn in_draft_order(draft: &Draft, user_id: &str) -> bool {
    draft
        .draft_order
        .as_ref()
        .is_some_and(|order| order.contains_key(user_id))
}

/// Owner -> slot. Every `draft_order` entry is taken as-is; slots from
/// `slot_to_roster_id` are added for roster owners not already mapped.
pub fn slot_by_owner(draft: &Draft, rosters: &[Roster]) -> HashMap<String, u32> {
    let mut slots: HashMap<String, u32> = draft.draft_order.clone().unwrap_or_default();

    let Some(slot_to_roster) = draft.slot_to_roster_id.as_ref() else {
        return slots;
    };

    let owner_by_roster: HashMap<u32, &str> = rosters
        .iter()
        .filter_map(|r| {
            r.owner_id
                .as_deref()
                .filter(|o| !o.is_empty())
                .map(|owner| (r.roster_id, owner))
        })
        .collect();

    let mut assigned: Vec<(u32, u32)> = slot_to_roster
        .iter()
        .filter_map(|(slot, roster_id)| Some((slot.trim().parse::<u32>().ok()?, (*roster_id)?)))
        .collect();
    assigned.sort_unstable();

    for (slot, roster_id) in assigned {
        if let Some(owner) = owner_by_roster.get(&roster_id) {
            slots.entry(owner.to_string()).or_insert(slot);
        }
    }
    slots
}

/// Everything known about the draft's shape. Without a draft payload the
/// defaults apply and no slots are known.
pub fn draft_config(
    draft: Option<&Draft>,
    league: Option<&League>,
    rosters: &[Roster],
) -> DraftConfig {
    DraftConfig {
        team_count: team_count(draft, league),
        total_rounds: draft.map(total_rounds).unwrap_or(DEFAULT_TOTAL_ROUNDS),
        is_snake: draft.map(is_snake).unwrap_or(false),
        slot_by_owner: draft
            .map(|d| slot_by_owner(d, rosters))
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
