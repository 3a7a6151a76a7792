// Roster requirements and the position metrics computed from the user's
// roster: hard-minimum fill levels and the RB/WR balance ratio.

use thiserror::Error;

use crate::draft::player::Position;
use crate::draft::roster::RosterEntry;

/// Lower bound of the balanced RB/WR window (inclusive).
pub const BALANCED_RATIO_MIN: f64 = 0.7;
/// Upper bound of the balanced RB/WR window (inclusive).
pub const BALANCED_RATIO_MAX: f64 = 1.3;
/// The ratio stays at `NEUTRAL_RATIO` until more than this many RBs and WRs
/// combined have been drafted.
pub const RATIO_SAMPLE_THRESHOLD: u32 = 3;
/// Ratio reported while there is too little data.
pub const NEUTRAL_RATIO: f64 = 1.0;
/// Ratio reported when RBs are drafted but no WRs.
pub const NO_WR_RATIO: f64 = 2.0;

// ---------------------------------------------------------------------------
// Roster requirements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementError {
    #[error("required count for {position} must not be negative, got {required}")]
    Negative { position: Position, required: i64 },

    #[error("{0} is listed more than once")]
    Duplicate(Position),

    #[error("required count for {position} is too large: {required}")]
    TooLarge { position: Position, required: i64 },
}

/// Hard minimum counts per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRequirements {
    entries: Vec<(Position, u32)>,
}

impl RosterRequirements {
    /// Build requirements from raw counts, rejecting negative, oversized,
    /// or repeated entries.
    pub fn new(entries: &[(Position, i64)]) -> Result<Self, RequirementError> {
        let mut validated: Vec<(Position, u32)> = Vec::with_capacity(entries.len());
        for &(position, required) in entries {
            if required < 0 {
                return Err(RequirementError::Negative { position, required });
            }
            let count = u32::try_from(required)
                .map_err(|_| RequirementError::TooLarge { position, required })?;
            if validated.iter().any(|(p, _)| *p == position) {
                return Err(RequirementError::Duplicate(position));
            }
            validated.push((position, count));
        }
        Ok(RosterRequirements { entries: validated })
    }

    /// The fixed league policy: two quarterbacks and one tight end.
    pub fn standard() -> Self {
        RosterRequirements {
            entries: vec![(Position::Quarterback, 2), (Position::TightEnd, 1)],
        }
    }

    pub fn required(&self, position: Position) -> Option<u32> {
        self.entries
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for RosterRequirements {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Position metrics
// ---------------------------------------------------------------------------

/// Fill level of one required position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionNeed {
    pub drafted: u32,
    pub required: u32,
    /// `max(required - drafted, 0)`.
    pub needed: u32,
    /// `drafted / required * 100`; 100 when nothing is required.
    pub percentage: f64,
}

/// Coarse fill level for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    Empty,
    Partial,
    Filled,
}

impl PositionNeed {
    fn new(drafted: u32, required: u32) -> Self {
        let percentage = if required == 0 {
            100.0
        } else {
            f64::from(drafted) / f64::from(required) * 100.0
        };
        PositionNeed {
            drafted,
            required,
            needed: required.saturating_sub(drafted),
            percentage,
        }
    }

    pub fn fill_status(&self) -> FillStatus {
        if self.needed == 0 {
            FillStatus::Filled
        } else if self.drafted == 0 {
            FillStatus::Empty
        } else {
            FillStatus::Partial
        }
    }
}

/// Where the RB/WR ratio sits relative to the balanced window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioBalance {
    /// Ratio below the window: too few RBs.
    RbLight,
    Balanced,
    /// Ratio above the window: too few WRs.
    WrLight,
}

impl RatioBalance {
    pub fn classify(ratio: f64) -> Self {
        if ratio < BALANCED_RATIO_MIN {
            RatioBalance::RbLight
        } else if ratio > BALANCED_RATIO_MAX {
            RatioBalance::WrLight
        } else {
            RatioBalance::Balanced
        }
    }
}

/// Position metrics for one roster snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionMetrics {
    /// One entry per required position, in requirement order.
    pub needs: Vec<(Position, PositionNeed)>,
    pub rb_drafted: u32,
    pub wr_drafted: u32,
    pub rb_wr_ratio: f64,
}

impl PositionMetrics {
    pub fn need(&self, position: Position) -> Option<&PositionNeed> {
        self.needs
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, need)| need)
    }

    pub fn ratio_balance(&self) -> RatioBalance {
        RatioBalance::classify(self.rb_wr_ratio)
    }
}

/// RB/WR ratio with the small-sample and zero-WR sentinels applied.
pub fn rb_wr_ratio(rb_drafted: u32, wr_drafted: u32) -> f64 {
    if rb_drafted + wr_drafted <= RATIO_SAMPLE_THRESHOLD {
        NEUTRAL_RATIO
    } else if wr_drafted == 0 {
        NO_WR_RATIO
    } else {
        f64::from(rb_drafted) / f64::from(wr_drafted)
    }
}

/// Count drafted players by position and derive needs and the RB/WR ratio.
pub fn compute_position_metrics(
    roster: &[RosterEntry],
    requirements: &RosterRequirements,
) -> PositionMetrics {
    let count = |position: Position| -> u32 {
        roster
            .iter()
            .filter(|e| e.player.position == position)
            .count() as u32
    };

    let needs = requirements
        .iter()
        .map(|(position, required)| (position, PositionNeed::new(count(position), required)))
        .collect();

    let rb_drafted = count(Position::RunningBack);
    let wr_drafted = count(Position::WideReceiver);

    PositionMetrics {
        needs,
        rb_drafted,
        wr_drafted,
        rb_wr_ratio: rb_wr_ratio(rb_drafted, wr_drafted),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
