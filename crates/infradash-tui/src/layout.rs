//! Dashboard layout.
//!
//! ```text
//! ┌ Insights ┐┌──── Topology ────┐┌ Servers ┐
//! │          ││                  ││         │
//! ├ Actions ─┤│                  │├ Routes ─┤
//! └──────────┘└──────────────────┘└─────────┘
//! ┌──────────────── Timeline ───────────────┐
//! └─────────────────────────────────────────┘
//!  status bar
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 60;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 20;

/// Timeline pane height including borders. Leaves room for a boxed tooltip.
pub const TIMELINE_HEIGHT: u16 = 8;

/// Action pane height: four buttons plus borders.
pub const ACTIONS_HEIGHT: u16 = 6;

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardRegions {
    pub insights: Rect,
    pub actions: Rect,
    pub topology: Rect,
    pub servers: Rect,
    pub routes: Rect,
    pub timeline: Rect,
    pub status: Rect,
}

/// Whether the terminal is large enough for the dashboard.
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

/// Split the terminal into dashboard regions.
pub fn dashboard_layout(area: Rect) -> DashboardRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(TIMELINE_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(3, 12),
            Constraint::Ratio(6, 12),
            Constraint::Ratio(3, 12),
        ])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(ACTIONS_HEIGHT)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[2]);

    DashboardRegions {
        insights: left[0],
        actions: left[1],
        topology: columns[1],
        servers: right[0],
        routes: right[1],
        timeline: rows[1],
        status: rows[2],
    }
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
