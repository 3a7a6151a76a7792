// Available players widget: the browse table of undrafted players.
//
// Ordered by browse score, with a star on every current recommendation.
// Filtered by position_filter and filter_text from ViewState.

use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};
use ratatui::Frame;

use draftline_core::draft::player::Position;
use draftline_core::recommend::browse::BrowseRow;

use crate::tui::ViewState;

pub const SCROLL_KEY: &str = "available";

const STAR: &str = "★";

/// Render the available players table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(snapshot) = &state.snapshot else {
        let paragraph = Paragraph::new("  Waiting for rankings...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Available Players"));
        frame.render_widget(paragraph, area);
        return;
    };

    let filtered = filter_rows(
        &snapshot.board.browse,
        state.position_filter,
        &state.filter_text,
    );
    let total = filtered.len();

    // Borders plus the header row.
    let visible_rows = (area.height as usize).saturating_sub(3);
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = state.scroll(SCROLL_KEY).min(max_offset);

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from("Pos"),
        Cell::from("Team"),
        Cell::from("Score"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = filtered
        .iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|row| {
            let style = if row.starred {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(if row.starred { STAR } else { "" }),
                Cell::from(row.player.display_rank().to_string()),
                Cell::from(row.player.name.clone()),
                Cell::from(row.player.position.display_str()),
                Cell::from(row.player.team.clone()),
                Cell::from(format!("{:.0}", row.score)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(build_title(state, total)));
    frame.render_widget(table, area);

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

/// Filter rows by position and a case-insensitive name search.
pub fn filter_rows<'a>(
    rows: &'a [BrowseRow],
    position_filter: Option<Position>,
    filter_text: &str,
) -> Vec<&'a BrowseRow> {
    let needle = filter_text.trim().to_lowercase();
    rows.iter()
        .filter(|r| position_filter.map_or(true, |pos| r.player.position == pos))
        .filter(|r| needle.is_empty() || r.player.name.to_lowercase().contains(&needle))
        .collect()
}

fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Available Players");
    if let Some(pos) = state.position_filter {
        title.push_str(&format!(" [{}]", pos.display_str()));
    }
    if !state.filter_text.is_empty() {
        title.push_str(&format!(" \"{}\"", state.filter_text));
    }
    if state.filter_mode {
        title.push('_');
    }
    title.push_str(&format!(" ({})", filtered_count));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::fixtures::{board_with_picks, buffer_text, sample_snapshot};

    #[test]
    fn no_filters_keeps_every_row_in_order() {
        let board = board_with_picks();
        let rows = filter_rows(&board.browse, None, "");
        let names: Vec<&str> = rows.iter().map(|r| r.player.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Ja'Marr Chase",
                "Brock Bowers",
                "Puka Nacua",
                "Jahmyr Gibbs",
                "Lamar Jackson",
                "Justin Tucker"
            ]
        );
    }

    #[test]
    fn filter_by_position() {
        let board = board_with_picks();
        let rows = filter_rows(&board.browse, Some(Position::WideReceiver), "");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.player.position == Position::WideReceiver));
    }

    #[test]
    fn filter_by_text_is_case_insensitive() {
        let board = board_with_picks();
        let rows = filter_rows(&board.browse, None, "  JACK ");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player.name, "Lamar Jackson");
    }

    #[test]
    fn filter_by_position_and_text() {
        let board = board_with_picks();
        assert!(filter_rows(&board.browse, Some(Position::TightEnd), "puka").is_empty());
    }

    #[test]
    fn recommendations_are_starred() {
        let board = board_with_picks();
        let starred: Vec<&str> = board
            .browse
            .iter()
            .filter(|r| r.starred)
            .map(|r| r.player.name.as_str())
            .collect();
        assert_eq!(starred.len(), 5);
        assert!(!starred.contains(&"Justin Tucker"));
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_shows_filtered_title_and_rows() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.snapshot = Some(sample_snapshot());
        state.position_filter = Some(Position::Quarterback);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Available Players [QB] (1)"));
        assert!(text.contains("Lamar Jackson"));
        assert!(!text.contains("Josh Allen"));
    }

    #[test]
    fn render_clamps_large_scroll_offset() {
        let backend = ratatui::backend::TestBackend::new(100, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.snapshot = Some(sample_snapshot());
        state.scroll_offset.insert(SCROLL_KEY.into(), 500);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        // Three visible rows: the last three players.
        assert!(buffer_text(terminal.backend().buffer()).contains("Justin Tucker"));
    }
}
