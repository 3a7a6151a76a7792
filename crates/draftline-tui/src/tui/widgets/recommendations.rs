// Recommendations widget: the top picks with their reasoning.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use draftline_core::recommend::engine::{Recommendation, MAX_DISPLAYED};

use crate::tui::ViewState;

/// Render the recommendation list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let recs = state
        .snapshot
        .as_ref()
        .map(|s| s.board.recommendations.as_slice())
        .unwrap_or_default();

    let block = Block::default().borders(Borders::ALL).title("Recommendations");

    if recs.is_empty() {
        let paragraph = Paragraph::new("  No players available.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let paragraph = Paragraph::new(build_lines(recs))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Headline plus reasoning line for each displayed recommendation.
pub fn build_lines(recs: &[Recommendation]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, rec) in recs.iter().take(MAX_DISPLAYED).enumerate() {
        let headline_style = if i == 0 {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(headline(i + 1, rec), headline_style),
            Span::styled(
                format!("  {:.0}", rec.score),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", rec.reasoning),
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )));
    }
    lines
}

pub fn headline(number: usize, rec: &Recommendation) -> String {
    format!(
        "{}. {} ({}, {})",
        number, rec.player.name, rec.player.position, rec.player.team
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
