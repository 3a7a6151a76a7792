// Quit confirmation overlay, drawn on top of the dashboard while
// `ViewState::confirm_quit` is set.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 34;
const DIALOG_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect) {
    let dialog = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog);

    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let lines = vec![
        Line::from("Stop following the draft?"),
        Line::from(vec![
            key("y", Color::Green),
            Span::raw(" quit   "),
            key("n", Color::Red),
            Span::raw(" keep watching"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .centered()
        .style(Style::default().bg(Color::Black))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Quit "),
        );
    frame.render_widget(paragraph, dialog);
}

/// A `width` x `height` rect in the middle of `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    dialog
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::fixtures::buffer_text;

    #[test]
    fn dialog_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let dialog = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        assert_eq!((dialog.width, dialog.height), (DIALOG_WIDTH, DIALOG_HEIGHT));
        assert_eq!(dialog.x, (80 - DIALOG_WIDTH) / 2);
        assert!(dialog.y.abs_diff((24 - DIALOG_HEIGHT) / 2) <= 1);
    }

    #[test]
    fn dialog_shrinks_to_small_area() {
        let area = Rect::new(0, 0, 12, 3);
        let dialog = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        assert!(dialog.width <= area.width);
        assert!(dialog.height <= area.height);
    }

    #[test]
    fn render_shows_prompt() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("Stop following the draft?"));
    }
}
