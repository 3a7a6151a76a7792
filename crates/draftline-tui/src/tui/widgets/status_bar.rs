// Status bar widget: data freshness, league, draft progress, refresh state,
// tab indicator.

use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use draftline_core::cache::Freshness;

use crate::protocol::{DashboardSnapshot, TabId};
use crate::tui::ViewState;

/// Render the status bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    match &state.snapshot {
        Some(snapshot) => {
            let (dot, color) = freshness_indicator(snapshot.freshness);
            spans.push(Span::styled(format!(" {} ", dot), Style::default().fg(color)));
            spans.push(Span::styled(
                snapshot.league_name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(separator());
            spans.push(Span::raw(progress_text(snapshot)));
            spans.push(separator());
            spans.push(Span::styled(
                freshness_text(snapshot.freshness, snapshot.updated_at),
                Style::default().fg(color),
            ));
        }
        None => {
            spans.push(Span::styled(" ● ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                "Waiting for first update...",
                Style::default().fg(Color::Gray),
            ));
        }
    }

    spans.push(separator());
    spans.push(Span::raw(auto_refresh_text(state)));
    if state.refresh_pending {
        spans.push(Span::styled(
            " (refreshing)",
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(separator());
    spans.extend(tab_spans(state.active_tab));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" | ", Style::default().fg(Color::Gray))
}

/// Dot and color for the pick data's freshness.
pub fn freshness_indicator(freshness: Freshness) -> (&'static str, Color) {
    match freshness {
        Freshness::Fresh => ("●", Color::Green),
        Freshness::Stale { .. } => ("●", Color::Yellow),
        Freshness::Unavailable => ("●", Color::Red),
    }
}

/// "Pick 14/180 | Round 2", or "Draft over" once the cursor is past the end.
pub fn progress_text(snapshot: &DashboardSnapshot) -> String {
    let round = match snapshot.round {
        Some(r) => format!("Round {}", r),
        None => "Draft over".to_string(),
    };
    format!(
        "Pick {}/{} | {}",
        snapshot.picks_made, snapshot.total_picks, round
    )
}

pub fn freshness_text(freshness: Freshness, updated_at: DateTime<Utc>) -> String {
    match freshness {
        Freshness::Fresh => format!("Updated {}", clock(updated_at)),
        Freshness::Stale { fetched_at } => format!("STALE since {}", clock(fetched_at)),
        Freshness::Unavailable => "No pick data".to_string(),
    }
}

fn clock(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

pub fn auto_refresh_text(state: &ViewState) -> String {
    if state.auto_refresh {
        format!("Auto {}s", state.refresh_interval_secs)
    } else {
        "Auto off".to_string()
    }
}

/// Tab indicators with the active tab highlighted.
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let tabs = [(TabId::Available, "1:Players"), (TabId::DraftLog, "2:Log")];

    let mut spans = Vec::new();
    for (tab_id, label) in tabs {
        let style = if tab_id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}]", label), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
