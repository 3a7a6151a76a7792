// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the latest snapshot plus purely local
// state (tab, filters, scroll). The app loop pushes `UiUpdate` messages over
// an mpsc channel; the TUI applies them and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{info, warn};

use draftline_core::draft::player::Position;

use crate::protocol::{DashboardSnapshot, TabId, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state read by `render_frame`.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Latest snapshot from the app loop; `None` until the first poll lands.
    pub snapshot: Option<DashboardSnapshot>,
    pub auto_refresh: bool,
    pub refresh_interval_secs: u64,
    /// Set when the user asks for a refresh, cleared by the next snapshot.
    pub refresh_pending: bool,
    pub active_tab: TabId,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Name search text for the available players table.
    pub filter_text: String,
    /// Whether keystrokes currently go to the name search.
    pub filter_mode: bool,
    pub position_filter: Option<Position>,
    /// Quit confirmation dialog is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            snapshot: None,
            auto_refresh: true,
            refresh_interval_secs: 30,
            refresh_pending: false,
            active_tab: TabId::Available,
            scroll_offset: HashMap::new(),
            filter_text: String::new(),
            filter_mode: false,
            position_filter: None,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    pub fn scroll_key(&self) -> &'static str {
        match self.active_tab {
            TabId::Available => widgets::available::SCROLL_KEY,
            TabId::DraftLog => widgets::draft_log::SCROLL_KEY,
        }
    }

    pub fn scroll(&self, key: &str) -> usize {
        self.scroll_offset.get(key).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Snapshot(snapshot) => {
            state.snapshot = Some(*snapshot);
            state.refresh_pending = false;
        }
        UiUpdate::AutoRefresh {
            enabled,
            interval_secs,
        } => {
            state.auto_refresh = enabled;
            state.refresh_interval_secs = interval_secs;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::turn_banner::render(frame, layout.turn_banner, state);
    match state.active_tab {
        TabId::Available => widgets::available::render(frame, layout.main_panel, state),
        TabId::DraftLog => widgets::draft_log::render(frame, layout.main_panel, state),
    }
    widgets::recommendations::render(frame, layout.recommendations, state);
    widgets::needs::render(frame, layout.needs, state);
    widgets::roster::render(frame, layout.roster, state);
    render_help_bar(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

/// Key hints for the current input mode.
pub fn help_text(state: &ViewState) -> &'static str {
    if state.filter_mode {
        " Type to search | Enter:Keep | Esc:Clear | Backspace:Delete"
    } else {
        " r:Refresh | a:Auto | 1-2:Tabs | p:Position | /:Search | Esc:Clear | j/k:Scroll | q:Quit"
    }
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        help_text(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// Takes over the terminal, then multiplexes UI updates, keyboard input and
/// a render tick until the user quits or the app loop goes away. The
/// terminal is restored on every exit path, including panics.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: anyhow::Result<()> = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => {
                        info!("UI channel closed");
                        break Ok(());
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal input error: {}", e);
                        break Err(e.into());
                    }
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::empty_snapshot;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.snapshot.is_none());
        assert!(state.auto_refresh);
        assert!(!state.refresh_pending);
        assert_eq!(state.active_tab, TabId::Available);
        assert!(state.scroll_offset.is_empty());
        assert!(!state.filter_mode);
        assert!(state.filter_text.is_empty());
        assert!(state.position_filter.is_none());
        assert!(!state.confirm_quit);
    }

    #[test]
    fn snapshot_update_replaces_snapshot_and_clears_pending() {
        let mut state = ViewState::default();
        state.refresh_pending = true;
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(empty_snapshot())));
        assert!(!state.refresh_pending);
        assert_eq!(
            state.snapshot.as_ref().map(|s| s.league_name.as_str()),
            Some("Test League")
        );
    }

    #[test]
    fn snapshot_update_keeps_local_state() {
        let mut state = ViewState::default();
        state.active_tab = TabId::DraftLog;
        state.filter_text = "chase".into();
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(empty_snapshot())));
        assert_eq!(state.active_tab, TabId::DraftLog);
        assert_eq!(state.filter_text, "chase");
    }

    #[test]
    fn auto_refresh_update() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::AutoRefresh {
                enabled: false,
                interval_secs: 45,
            },
        );
        assert!(!state.auto_refresh);
        assert_eq!(state.refresh_interval_secs, 45);
    }

    #[test]
    fn scroll_key_follows_tab() {
        let mut state = ViewState::default();
        assert_eq!(state.scroll_key(), "available");
        state.active_tab = TabId::DraftLog;
        assert_eq!(state.scroll_key(), "draft_log");
        assert_eq!(state.scroll("draft_log"), 0);
    }

    #[test]
    fn help_text_depends_on_mode() {
        let mut state = ViewState::default();
        assert!(help_text(&state).contains("q:Quit"));
        state.filter_mode = true;
        assert!(help_text(&state).contains("Enter:Keep"));
    }

    #[test]
    fn render_frame_without_snapshot() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }

    #[test]
    fn render_frame_with_snapshot_and_quit_dialog() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.snapshot = Some(empty_snapshot());
        state.confirm_quit = true;
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
        state.active_tab = TabId::DraftLog;
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }
}
