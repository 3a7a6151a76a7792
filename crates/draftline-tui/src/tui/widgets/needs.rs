// Roster needs widget: fill gauges for required positions and the RB/WR
// balance.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use draftline_core::draft::player::Position;
use draftline_core::recommend::metrics::{FillStatus, PositionMetrics, PositionNeed, RatioBalance};

use crate::tui::ViewState;

/// Cells in a fill gauge.
const GAUGE_WIDTH: usize = 10;

/// Render the needs panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title("Roster Needs");

    let Some(snapshot) = &state.snapshot else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let metrics = &snapshot.board.metrics;
    let mut lines: Vec<Line> = metrics
        .needs
        .iter()
        .map(|(pos, need)| need_line(*pos, need))
        .collect();
    lines.push(ratio_line(metrics));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn need_line(position: Position, need: &PositionNeed) -> Line<'static> {
    let color = fill_color(need.fill_status());
    Line::from(vec![
        Span::raw(format!(
            " {:<3} {}/{} ",
            position.display_str(),
            need.drafted,
            need.required
        )),
        Span::styled(gauge_bar(need.percentage, GAUGE_WIDTH), Style::default().fg(color)),
    ])
}

fn ratio_line(metrics: &PositionMetrics) -> Line<'static> {
    let balance = metrics.ratio_balance();
    let color = match balance {
        RatioBalance::Balanced => Color::Green,
        RatioBalance::RbLight | RatioBalance::WrLight => Color::Yellow,
    };
    Line::from(vec![
        Span::raw(format!(" {} ", ratio_text(metrics))),
        Span::styled(balance_label(balance), Style::default().fg(color)),
    ])
}

/// The RB/WR counts and ratio. With RBs but no WRs the ratio is a sentinel,
/// so it is spelled out instead of printed.
pub fn ratio_text(metrics: &PositionMetrics) -> String {
    if metrics.wr_drafted == 0 && metrics.rb_drafted > 0 {
        format!("RB/WR {}/0 = no WRs yet", metrics.rb_drafted)
    } else {
        format!(
            "RB/WR {}/{} = {:.2}",
            metrics.rb_drafted, metrics.wr_drafted, metrics.rb_wr_ratio
        )
    }
}

pub fn fill_color(status: FillStatus) -> Color {
    match status {
        FillStatus::Empty => Color::Red,
        FillStatus::Partial => Color::Yellow,
        FillStatus::Filled => Color::Green,
    }
}

pub fn balance_label(balance: RatioBalance) -> &'static str {
    match balance {
        RatioBalance::Balanced => "balanced",
        RatioBalance::RbLight => "need RBs",
        RatioBalance::WrLight => "need WRs",
    }
}

/// A `width`-cell bar, filled in proportion to `percentage` (clamped to
/// 0..=100).
pub fn gauge_bar(percentage: f64, width: usize) -> String {
    let fraction = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
