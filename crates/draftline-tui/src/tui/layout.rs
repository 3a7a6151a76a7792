// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Turn Banner (3 rows)                              |
// +-----------------------------+--------------------+
// | Main Panel (60%)             | Sidebar (40%)      |
// |                              | +- Recs (50%) ----+|
// |                              | +- Needs (5) -----+|
// |                              | +- Roster --------+|
// +-----------------------------+--------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows for the needs panel: QB, TE and ratio lines plus borders.
const NEEDS_HEIGHT: u16 = 5;

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub status_bar: Rect,
    pub turn_banner: Rect,
    /// Tab-switched content: available players or the draft log.
    pub main_panel: Rect,
    pub recommendations: Rect,
    pub needs: Rect,
    pub roster: Rect,
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // turn banner
            Constraint::Min(10),   // main + sidebar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(vertical[2]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(NEEDS_HEIGHT),
            Constraint::Min(3),
        ])
        .split(horizontal[1]);

    AppLayout {
        status_bar: vertical[0],
        turn_banner: vertical[1],
        main_panel: horizontal[0],
        recommendations: sidebar[0],
        needs: sidebar[1],
        roster: sidebar[2],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
