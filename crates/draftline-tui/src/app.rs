// Application loop: polls the draft on a timer and on demand, recomputes the
// board from scratch, and pushes one snapshot per cycle to the TUI.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use draftline_core::board::{BoardParams, DraftBoard};
use draftline_core::config::RefreshConfig;
use draftline_core::draft::player::Player;
use draftline_core::recommend::metrics::RosterRequirements;
use draftline_sleeper::{DraftSnapshot, DraftSource, DraftTracker};

use crate::protocol::{DashboardSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// State owned by the app loop. The TUI never touches it directly.
pub struct AppState<S: DraftSource> {
    tracker: DraftTracker<S>,
    /// Ranking pool, loaded once at startup.
    pool: Vec<Player>,
    requirements: RosterRequirements,
    top_n: usize,
    refresh_interval: Duration,
    auto_refresh: bool,
}

impl<S: DraftSource> AppState<S> {
    pub fn new(
        tracker: DraftTracker<S>,
        pool: Vec<Player>,
        requirements: RosterRequirements,
        top_n: usize,
        refresh: &RefreshConfig,
    ) -> Self {
        Self {
            tracker,
            pool,
            requirements,
            top_n,
            // tokio intervals reject a zero period.
            refresh_interval: Duration::from_secs(refresh.interval_secs.max(1)),
            auto_refresh: refresh.auto_refresh,
        }
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Flip auto-refresh and return the new setting.
    pub fn toggle_auto_refresh(&mut self) -> bool {
        self.auto_refresh = !self.auto_refresh;
        self.auto_refresh
    }

    /// Turn one poll result into a dashboard snapshot. Pure: the board is
    /// recomputed from the pool and the pick list every time.
    pub fn build_snapshot(&self, draft: DraftSnapshot) -> DashboardSnapshot {
        let params = BoardParams {
            user_id: self.tracker.user_id(),
            requirements: &self.requirements,
            top_n: self.top_n,
        };
        let board = DraftBoard::compute(&self.pool, &draft.picks, &draft.owner_names, &params);
        let picks_made = draft.picks_made();

        DashboardSnapshot {
            league_name: draft
                .league_name
                .unwrap_or_else(|| format!("League {}", self.tracker.league_id())),
            draft_status: draft.draft_status,
            picks_made,
            total_picks: draft.config.total_picks(),
            round: draft.config.current_round(picks_made),
            turn: draft.turn,
            freshness: draft.freshness,
            board,
            updated_at: draft.taken_at,
        }
    }

    /// Poll the draft once and build the snapshot.
    pub async fn refresh(&mut self) -> DashboardSnapshot {
        let draft = self.tracker.refresh(Utc::now()).await;
        self.build_snapshot(draft)
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the application event loop.
///
/// Sends the auto-refresh setting and an initial snapshot, then listens on
/// the command channel and the refresh timer until `Quit` arrives or the
/// command channel closes.
pub async fn run<S: DraftSource>(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState<S>,
) -> anyhow::Result<()> {
    info!(
        "Application event loop started (auto-refresh {}, every {:?})",
        if state.auto_refresh { "on" } else { "off" },
        state.refresh_interval
    );

    send_auto_refresh(&state, &ui_tx).await;
    push_snapshot(&mut state, &ui_tx).await;

    let mut ticker = tokio::time::interval(state.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the initial snapshot covers it.
    ticker.tick().await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(UserCommand::Refresh) => {
                        info!("Manual refresh");
                        push_snapshot(&mut state, &ui_tx).await;
                        ticker.reset();
                    }
                    Some(UserCommand::ToggleAutoRefresh) => {
                        let enabled = state.toggle_auto_refresh();
                        info!("Auto-refresh {}", if enabled { "enabled" } else { "disabled" });
                        if enabled {
                            ticker.reset();
                        }
                        send_auto_refresh(&state, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            _ = ticker.tick(), if state.auto_refresh => {
                debug!("Auto-refresh tick");
                push_snapshot(&mut state, &ui_tx).await;
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

async fn push_snapshot<S: DraftSource>(state: &mut AppState<S>, ui_tx: &mpsc::Sender<UiUpdate>) {
    let snapshot = state.refresh().await;
    debug!(
        "Snapshot: {}/{} picks, turn {:?}, fresh {}",
        snapshot.picks_made,
        snapshot.total_picks,
        snapshot.turn,
        snapshot.freshness.is_fresh()
    );
    let _ = ui_tx.send(UiUpdate::Snapshot(Box::new(snapshot))).await;
}

async fn send_auto_refresh<S: DraftSource>(state: &AppState<S>, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::AutoRefresh {
            enabled: state.auto_refresh,
            interval_secs: state.refresh_interval.as_secs(),
        })
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
