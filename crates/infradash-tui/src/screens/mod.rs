//! Screen definitions for the infradash TUI.

pub mod dashboard;

use crate::app::App;
use crate::layout::centered_fixed;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let help_text = r"
  Navigation
    Tab / Shift+Tab   Next/prev pane
    1-6               Jump to pane
    h/l or Left/Right Hover prev/next event
    j/k or Up/Down    Scroll / select
    g / G             First / last
    Enter             Run selected action
    Esc               Clear hover
    y                 Copy hovered event
    q                 Quit
    ?                 Toggle this help

  Mouse: hover events and nodes, wheel scrolls,
  click actions. Resting near either end of the
  timeline scrolls it automatically.

  [Press any key to close]
";

    let width = 54.min(area.width.saturating_sub(4));
    let height = 22.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(theme.primary))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.base));

    Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(theme.text).bg(theme.base))
        .render(overlay_area, buf);
}
