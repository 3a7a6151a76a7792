// Turn banner widget: where the user stands relative to their next pick.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use draftline_core::draft::order::TurnStatus;
use draftline_core::recommend::engine::Recommendation;

use crate::tui::ViewState;

/// Render the turn banner into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (text, style, title) = match &state.snapshot {
        Some(snapshot) => (
            turn_message(snapshot.turn, snapshot.top_recommendation()),
            turn_style(snapshot.turn),
            match snapshot.draft_status.as_deref() {
                Some(status) => format!("Turn [{}]", status),
                None => "Turn".to_string(),
            },
        ),
        None => (
            "Loading draft...".to_string(),
            Style::default().fg(Color::DarkGray),
            "Turn".to_string(),
        ),
    };

    let paragraph = Paragraph::new(format!(" {}", text))
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

/// One-line description of the turn status. On the clock it names the top
/// recommendation when there is one.
pub fn turn_message(turn: TurnStatus, top: Option<&Recommendation>) -> String {
    match turn {
        TurnStatus::OnTheClock => match top {
            Some(rec) => format!(
                "You're on the clock! Top pick: {} ({}, {})",
                rec.player.name, rec.player.position, rec.player.team
            ),
            None => "You're on the clock!".to_string(),
        },
        TurnStatus::PicksAway(1) => "1 pick until your turn".to_string(),
        TurnStatus::PicksAway(n) => format!("{} picks until your turn", n),
        TurnStatus::Waiting => "Not your turn (count unknown)".to_string(),
        TurnStatus::UserFinished => "Your picks are done".to_string(),
        TurnStatus::Complete => "Draft complete".to_string(),
        TurnStatus::Undetermined => "Turn order unknown".to_string(),
    }
}

pub fn turn_style(turn: TurnStatus) -> Style {
    match turn {
        TurnStatus::OnTheClock => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TurnStatus::PicksAway(n) if n <= 2 => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TurnStatus::PicksAway(_) | TurnStatus::Waiting => Style::default().fg(Color::White),
        TurnStatus::UserFinished | TurnStatus::Complete => Style::default().fg(Color::Gray),
        TurnStatus::Undetermined => Style::default().fg(Color::Red),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
