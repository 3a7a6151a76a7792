// Roster widget: the user's drafted players grouped by position.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use draftline_core::draft::roster::RosterEntry;

use crate::tui::ViewState;

/// Render the roster sidebar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let roster = state
        .snapshot
        .as_ref()
        .map(|s| s.board.roster.as_slice())
        .unwrap_or_default();

    if roster.is_empty() {
        let paragraph = Paragraph::new("  Nobody drafted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("My Roster"));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = grouped(roster)
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<3} ", entry.player.position.display_str()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_entry(entry)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("My Roster ({})", roster.len())),
    );
    frame.render_widget(list, area);
}

/// Entries ordered by position, then by pick.
pub fn grouped(roster: &[RosterEntry]) -> Vec<&RosterEntry> {
    let mut entries: Vec<&RosterEntry> = roster.iter().collect();
    entries.sort_by_key(|e| (e.player.position.sort_order(), e.pick_no));
    entries
}

pub fn format_entry(entry: &RosterEntry) -> String {
    format!(
        "{} ({}) R{} #{}",
        entry.player.name, entry.player.team, entry.round, entry.pick_no
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
