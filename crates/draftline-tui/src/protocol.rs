// Messages exchanged between the app loop and the TUI.
//
// The app loop owns the tracker and the ranking pool; the TUI only ever sees
// finished snapshots. Both sides talk over bounded mpsc channels.

use chrono::{DateTime, Utc};

use draftline_core::board::DraftBoard;
use draftline_core::cache::Freshness;
use draftline_core::draft::order::TurnStatus;
use draftline_core::recommend::engine::Recommendation;

/// Commands sent from the TUI to the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Poll the draft now instead of waiting for the next tick.
    Refresh,
    ToggleAutoRefresh,
    Quit,
}

/// Updates sent from the app loop to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// Result of one refresh cycle.
    Snapshot(Box<DashboardSnapshot>),
    /// Auto-refresh was switched on or off (also sent once at startup).
    AutoRefresh { enabled: bool, interval_secs: u64 },
}

/// Main panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Available,
    DraftLog,
}

/// Everything the dashboard renders for one refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub league_name: String,
    /// Sleeper's status string ("pre_draft", "drafting", ...), when known.
    pub draft_status: Option<String>,
    pub picks_made: u32,
    pub total_picks: u32,
    /// 1-based round on the clock; `None` once the draft is over.
    pub round: Option<u32>,
    pub turn: TurnStatus,
    pub freshness: Freshness,
    pub board: DraftBoard,
    pub updated_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn top_recommendation(&self) -> Option<&Recommendation> {
        self.board.recommendations.first()
    }
}
