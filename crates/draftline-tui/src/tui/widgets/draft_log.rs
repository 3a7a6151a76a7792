// Draft log widget: completed picks, most recent first.
//
// Each line: "#{pick} R{round} {drafter}: {player} ({pos}, {team})".
// The user's own picks are highlighted.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use draftline_core::board::DraftLogEntry;

use crate::tui::ViewState;

pub const SCROLL_KEY: &str = "draft_log";

/// Render the draft log into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let log = state
        .snapshot
        .as_ref()
        .map(|s| s.board.log.as_slice())
        .unwrap_or_default();

    if log.is_empty() {
        let paragraph = Paragraph::new("  No picks yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Draft Log"));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_rows = (area.height as usize).saturating_sub(2);
    let total = log.len();
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = state.scroll(SCROLL_KEY).min(max_offset);

    let items: Vec<ListItem> = log
        .iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|entry| {
            let style = if entry.is_user {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format_entry(entry), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Draft Log ({})", total)),
    );
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state = ScrollbarState::new(max_offset).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Format a single log entry for display.
pub fn format_entry(entry: &DraftLogEntry) -> String {
    let details = match (entry.position, entry.team.as_deref()) {
        (Some(pos), Some(team)) if !team.is_empty() => format!(" ({}, {})", pos, team),
        (Some(pos), _) => format!(" ({})", pos),
        (None, _) => String::new(),
    };
    format!(
        "#{} R{} {}: {}{}",
        entry.pick_no, entry.round, entry.drafted_by, entry.player_name, details
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::fixtures::{board_with_picks, buffer_text, sample_snapshot};
    use draftline_core::draft::player::Position;

    #[test]
    fn format_known_player() {
        let entry = DraftLogEntry {
            pick_no: 14,
            round: 2,
            player_name: "Puka Nacua".into(),
            position: Some(Position::WideReceiver),
            team: Some("LAR".into()),
            drafted_by: "Rival GM".into(),
            is_user: false,
        };
        assert_eq!(format_entry(&entry), "#14 R2 Rival GM: Puka Nacua (WR, LAR)");
    }

    #[test]
    fn format_unknown_player() {
        let board = board_with_picks();
        assert_eq!(format_entry(&board.log[0]), "#3 R1 Rival GM: Unknown (99)");
    }

    #[test]
    fn format_player_without_team() {
        let entry = DraftLogEntry {
            pick_no: 1,
            round: 1,
            player_name: "Rookie".into(),
            position: Some(Position::RunningBack),
            team: Some(String::new()),
            drafted_by: "u1".into(),
            is_user: true,
        };
        assert_eq!(format_entry(&entry), "#1 R1 u1: Rookie (RB)");
    }

    #[test]
    fn render_does_not_panic_empty() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("No picks yet."));
    }

    #[test]
    fn render_lists_newest_first() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.snapshot = Some(sample_snapshot());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Draft Log (3)"));
        let newest = text.find("#3 R1").unwrap();
        let oldest = text.find("#1 R1").unwrap();
        assert!(newest < oldest);
        assert!(text.contains("#2 R1 me: Josh Allen (QB, BUF)"));
    }
}
