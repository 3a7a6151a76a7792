// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// loop, or into local ViewState changes (tabs, scroll, filters).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use draftline_core::draft::player::Position;

use super::ViewState;
use crate::protocol::{TabId, UserCommand};

/// Positions visited by the `p` key, after "all positions".
const POSITION_CYCLE: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Kicker,
    Position::Defense,
];

/// Lines moved by PageUp/PageDown.
const PAGE_SIZE: usize = 20;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key should be forwarded to the app
/// loop, `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports both Press and Release for each keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Available;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::DraftLog;
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            scroll_up(view_state, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            scroll_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll_up(view_state, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            scroll_down(view_state, PAGE_SIZE);
            None
        }

        // Name search only applies to the players table.
        KeyCode::Char('/') => {
            if view_state.active_tab == TabId::Available {
                view_state.filter_mode = true;
            }
            None
        }
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.position_filter = None;
            reset_available_scroll(view_state);
            None
        }
        KeyCode::Char('p') => {
            cycle_position_filter(view_state);
            None
        }

        KeyCode::Char('r') => {
            view_state.refresh_pending = true;
            Some(UserCommand::Refresh)
        }
        KeyCode::Char('a') => Some(UserCommand::ToggleAutoRefresh),

        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// `y`/`q` confirm, `n`/Esc cancel, everything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
            reset_available_scroll(view_state);
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
            reset_available_scroll(view_state);
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            reset_available_scroll(view_state);
        }
        _ => {}
    }
    None
}

/// All -> QB -> RB -> WR -> TE -> K -> DEF -> All.
fn cycle_position_filter(view_state: &mut ViewState) {
    view_state.position_filter = match view_state.position_filter {
        None => Some(POSITION_CYCLE[0]),
        Some(current) => POSITION_CYCLE
            .iter()
            .position(|p| *p == current)
            .and_then(|i| POSITION_CYCLE.get(i + 1))
            .copied(),
    };
    reset_available_scroll(view_state);
}

/// A changed filter shrinks the table, so start it from the top.
fn reset_available_scroll(view_state: &mut ViewState) {
    view_state
        .scroll_offset
        .remove(super::widgets::available::SCROLL_KEY);
}

fn scroll_up(view_state: &mut ViewState, lines: usize) {
    let key = view_state.scroll_key();
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

/// Unbounded here; widgets clamp the offset to their row count.
fn scroll_down(view_state: &mut ViewState, lines: usize) {
    let key = view_state.scroll_key();
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // -- Tabs --

    #[test]
    fn number_keys_switch_tabs() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('2')), &mut state).is_none());
        assert_eq!(state.active_tab, TabId::DraftLog);
        assert!(handle_key(key(KeyCode::Char('1')), &mut state).is_none());
        assert_eq!(state.active_tab, TabId::Available);
    }

    // -- Commands --

    #[test]
    fn r_requests_refresh() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('r')), &mut state),
            Some(UserCommand::Refresh)
        );
        assert!(state.refresh_pending);
    }

    #[test]
    fn a_toggles_auto_refresh() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('a')), &mut state),
            Some(UserCommand::ToggleAutoRefresh)
        );
        // The app loop owns the setting; the view waits for its echo.
        assert!(state.auto_refresh);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('r'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(handle_key(release, &mut state).is_none());
        assert!(!state.refresh_pending);
    }

    // -- Scroll --

    #[test]
    fn scroll_targets_active_tab() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.scroll_offset.get("available"), Some(&2));

        state.active_tab = TabId::DraftLog;
        handle_key(key(KeyCode::PageDown), &mut state);
        assert_eq!(state.scroll_offset.get("draft_log"), Some(&20));
        handle_key(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.scroll_offset.get("draft_log"), Some(&19));
        assert_eq!(state.scroll_offset.get("available"), Some(&2));
    }

    #[test]
    fn scroll_up_does_not_underflow() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Up), &mut state);
        handle_key(key(KeyCode::PageUp), &mut state);
        assert_eq!(state.scroll_offset["available"], 0);
    }

    // -- Filters --

    #[test]
    fn position_filter_cycles_and_wraps() {
        let mut state = ViewState::default();
        let mut seen = Vec::new();
        for _ in 0..7 {
            handle_key(key(KeyCode::Char('p')), &mut state);
            seen.push(state.position_filter);
        }
        assert_eq!(
            seen,
            vec![
                Some(Position::Quarterback),
                Some(Position::RunningBack),
                Some(Position::WideReceiver),
                Some(Position::TightEnd),
                Some(Position::Kicker),
                Some(Position::Defense),
                None,
            ]
        );
    }

    #[test]
    fn position_filter_resets_table_scroll() {
        let mut state = ViewState::default();
        state.scroll_offset.insert("available".into(), 12);
        handle_key(key(KeyCode::Char('p')), &mut state);
        assert!(!state.scroll_offset.contains_key("available"));
    }

    #[test]
    fn slash_enters_filter_mode_only_on_available_tab() {
        let mut state = ViewState::default();
        state.active_tab = TabId::DraftLog;
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert!(!state.filter_mode);

        state.active_tab = TabId::Available;
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert!(state.filter_mode);
    }

    #[test]
    fn filter_mode_captures_typing() {
        let mut state = ViewState::default();
        state.filter_mode = true;
        for c in "chasx".chars() {
            handle_key(key(KeyCode::Char(c)), &mut state);
        }
        handle_key(key(KeyCode::Backspace), &mut state);
        handle_key(key(KeyCode::Char('e')), &mut state);
        assert_eq!(state.filter_text, "chase");

        // Command keys are text while searching.
        assert!(handle_key(key(KeyCode::Char('q')), &mut state).is_none());
        assert!(!state.confirm_quit);
        assert_eq!(state.filter_text, "chaseq");
    }

    #[test]
    fn enter_keeps_filter_and_esc_clears_it() {
        let mut state = ViewState::default();
        state.filter_mode = true;
        state.filter_text = "allen".into();
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(!state.filter_mode);
        assert_eq!(state.filter_text, "allen");

        state.filter_mode = true;
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.filter_mode);
        assert!(state.filter_text.is_empty());
    }

    #[test]
    fn esc_in_normal_mode_clears_all_filters() {
        let mut state = ViewState::default();
        state.filter_text = "gibbs".into();
        state.position_filter = Some(Position::RunningBack);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(state.filter_text.is_empty());
        assert!(state.position_filter.is_none());
    }

    // -- Quit --

    #[test]
    fn q_asks_for_confirmation() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('q')), &mut state).is_none());
        assert!(state.confirm_quit);
        assert_eq!(
            handle_key(key(KeyCode::Char('y')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn confirmation_can_be_cancelled() {
        let mut state = ViewState::default();
        state.confirm_quit = true;
        assert!(handle_key(key(KeyCode::Char('r')), &mut state).is_none());
        assert!(state.confirm_quit);
        assert!(handle_key(key(KeyCode::Char('n')), &mut state).is_none());
        assert!(!state.confirm_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut state = ViewState::default();
        state.filter_mode = true;
        assert_eq!(
            handle_key(ctrl_key(KeyCode::Char('c')), &mut state),
            Some(UserCommand::Quit)
        );
        state.filter_mode = false;
        state.confirm_quit = true;
        assert_eq!(
            handle_key(ctrl_key(KeyCode::Char('c')), &mut state),
            Some(UserCommand::Quit)
        );
    }
}
