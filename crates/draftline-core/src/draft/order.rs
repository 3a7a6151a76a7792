// Draft order and turn scheduling.
//
// Pure functions over a `DraftConfig` and the current pick cursor (the number
// of picks made so far). Resolving the config from platform data lives in the
// Sleeper crate; nothing here performs I/O.

use std::collections::HashMap;

use thiserror::Error;

/// Team count used when no source reports one.
pub const DEFAULT_TEAM_COUNT: u32 = 12;

/// Round count used when the draft settings omit it.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 15;

// ---------------------------------------------------------------------------
// DraftConfig
// ---------------------------------------------------------------------------

/// Shape of one draft: size, length, direction rule, and who picks where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftConfig {
    pub team_count: u32,
    pub total_rounds: u32,
    /// Snake drafts reverse the pick order every other round.
    pub is_snake: bool,
    /// Owner identifier -> 1-based draft slot (position in round one).
    pub slot_by_owner: HashMap<String, u32>,
}

/// Problems found when checking a slot map against the team count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("owner `{owner}` has slot {slot}, outside 1..={team_count}")]
    OutOfRange {
        owner: String,
        slot: u32,
        team_count: u32,
    },

    #[error("slot {slot} is assigned to more than one owner")]
    Duplicate { slot: u32 },
}

impl DraftConfig {
    /// Total number of picks in the draft.
    pub fn total_picks(&self) -> u32 {
        self.team_count.saturating_mul(self.total_rounds)
    }

    /// The draft slot assigned to `owner`, if any.
    pub fn slot_for(&self, owner: &str) -> Option<u32> {
        self.slot_by_owner.get(owner).copied()
    }

    /// Whether `round` (0-based) runs in reverse slot order.
    fn is_reversed(&self, round: u32) -> bool {
        self.is_snake && round % 2 == 1
    }

    /// 0-based index within `round` (0-based) at which `slot` picks.
    ///
    /// `slot` must be within `1..=team_count`.
    fn pick_index_in_round(&self, round: u32, slot: u32) -> u32 {
        if self.is_reversed(round) {
            self.team_count - slot
        } else {
            slot - 1
        }
    }

    /// The slot due to make the pick at cursor `picks_so_far`, or `None`
    /// once the draft is over or when the config has no teams.
    pub fn slot_on_the_clock(&self, picks_so_far: u32) -> Option<u32> {
        if self.team_count == 0 || picks_so_far >= self.total_picks() {
            return None;
        }
        let round = picks_so_far / self.team_count;
        let index = picks_so_far % self.team_count;
        Some(if self.is_reversed(round) {
            self.team_count - index
        } else {
            index + 1
        })
    }

    /// 1-based round of the pick at cursor `picks_so_far`.
    pub fn current_round(&self, picks_so_far: u32) -> Option<u32> {
        if self.team_count == 0 || picks_so_far >= self.total_picks() {
            return None;
        }
        Some(picks_so_far / self.team_count + 1)
    }

    /// Check that every slot is in range and no slot is shared.
    ///
    /// A partially filled map (owners still joining) is not an error.
    pub fn check_slots(&self) -> Result<(), SlotError> {
        let mut seen = HashMap::new();
        let mut owners: Vec<(&String, &u32)> = self.slot_by_owner.iter().collect();
        owners.sort();
        for (owner, &slot) in owners {
            if slot == 0 || slot > self.team_count {
                return Err(SlotError::OutOfRange {
                    owner: owner.clone(),
                    slot,
                    team_count: self.team_count,
                });
            }
            if seen.insert(slot, owner).is_some() {
                return Err(SlotError::Duplicate { slot });
            }
        }
        Ok(())
    }
}

/// Pick the team count from the available signals, in priority order:
/// slot-to-roster mapping size, draft-order mapping size, the league's
/// configured roster count, then `DEFAULT_TEAM_COUNT`. Empty mappings and
/// zero counts are treated as missing.
pub fn resolve_team_count(
    slot_mapping_len: Option<usize>,
    draft_order_len: Option<usize>,
    league_rosters: Option<u32>,
) -> u32 {
    slot_mapping_len
        .filter(|&n| n > 0)
        .or(draft_order_len.filter(|&n| n > 0))
        .map(|n| n as u32)
        .or(league_rosters.filter(|&n| n > 0))
        .unwrap_or(DEFAULT_TEAM_COUNT)
}

// ---------------------------------------------------------------------------
// TurnStatus
// ---------------------------------------------------------------------------

/// Where the user stands relative to their next pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The user is picking now.
    OnTheClock,
    /// This many picks by other owners come before the user's turn.
    PicksAway(u32),
    /// Someone else is picking; the exact distance is unknown. Only produced
    /// from the live draft-status fallback, when no slot data exists.
    Waiting,
    /// The draft is still running but the user has made all of their picks.
    UserFinished,
    /// Every pick in the draft has been made.
    Complete,
    /// The user's slot could not be determined.
    Undetermined,
}

impl TurnStatus {
    /// Integer form: 0 on the clock, n picks away, 1 for `Waiting`, and -1
    /// for the three "no upcoming turn known" states.
    ///
    /// -1 is not limited to a finished draft: `UserFinished` also maps to -1
    /// while other owners still have picks left, and so does `Undetermined`.
    /// Match on the variant to tell them apart.
    pub fn as_code(self) -> i32 {
        match self {
            TurnStatus::OnTheClock => 0,
            TurnStatus::PicksAway(n) => i32::try_from(n).unwrap_or(i32::MAX),
            TurnStatus::Waiting => 1,
            TurnStatus::UserFinished | TurnStatus::Complete | TurnStatus::Undetermined => -1,
        }
    }

    /// Exact number of picks before the user's turn, when known.
    pub fn picks_away(self) -> Option<u32> {
        match self {
            TurnStatus::OnTheClock => Some(0),
            TurnStatus::PicksAway(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_on_the_clock(self) -> bool {
        self == TurnStatus::OnTheClock
    }
}

/// Count the picks remaining before `user_slot` is on the clock.
///
/// `picks_so_far` is the draft cursor: the next pick to be made is pick
/// number `picks_so_far + 1`. In a snake draft the distance walks to the end
/// of the current round and then through the next round in its (reversed)
/// direction, so it can reach `2 * (team_count - 1)`.
///
/// Never panics; degenerate inputs map to `Complete` or `Undetermined`.
pub fn picks_until_user_turn(
    config: &DraftConfig,
    picks_so_far: u32,
    user_slot: Option<u32>,
) -> TurnStatus {
    let teams = config.team_count;
    if teams == 0 {
        return TurnStatus::Undetermined;
    }
    if picks_so_far >= config.total_picks() {
        return TurnStatus::Complete;
    }
    let Some(slot) = user_slot.filter(|s| (1..=teams).contains(s)) else {
        return TurnStatus::Undetermined;
    };

    let round = picks_so_far / teams;
    let index = picks_so_far % teams;
    let user_index = config.pick_index_in_round(round, slot);

    let distance = if user_index >= index {
        user_index - index
    } else if round + 1 < config.total_rounds {
        // Finish this round, then count into the next one.
        (teams - index) + config.pick_index_in_round(round + 1, slot)
    } else {
        return TurnStatus::UserFinished;
    };

    if distance == 0 {
        TurnStatus::OnTheClock
    } else {
        TurnStatus::PicksAway(distance)
    }
}

/// `picks_until_user_turn` for an owner id looked up in the config's slot map.
pub fn turn_for_owner(config: &DraftConfig, picks_so_far: u32, owner: &str) -> TurnStatus {
    picks_until_user_turn(config, picks_so_far, config.slot_for(owner))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
