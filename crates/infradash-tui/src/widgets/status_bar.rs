//! Status bar widget for the bottom of the TUI.
//!
//! Format: `● Focus │ auto: state │ last: action │ hints          clock`

use infradash_core::AutoScrollState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// Status bar content.
#[derive(Debug, Clone, Default)]
pub struct StatusBarContent {
    /// Name of the focused pane.
    pub focus: String,
    /// Timeline auto-scroll state.
    pub autoscroll: AutoScrollState,
    /// Message for the last dispatched action.
    pub last_action: Option<String>,
    /// Local time, already formatted.
    pub clock: String,
}

/// Status bar widget.
pub struct StatusBar<'a> {
    content: &'a StatusBarContent,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget.
    pub fn new(content: &'a StatusBarContent, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sep = || Span::styled(" │ ", Style::default().fg(self.theme.muted));
        let auto_color = if self.content.autoscroll == AutoScrollState::Idle {
            self.theme.subtext
        } else {
            self.theme.primary
        };

        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.theme.primary)),
            Span::styled(self.content.focus.as_str(), Style::default().fg(self.theme.text)),
            sep(),
            Span::styled(
                format!("auto: {}", self.content.autoscroll),
                Style::default().fg(auto_color),
            ),
        ];

        if let Some(ref action) = self.content.last_action {
            spans.push(sep());
            spans.push(Span::styled(action.as_str(), Style::default().fg(self.theme.info)));
        }

        spans.push(sep());
        spans.push(Span::styled(
            "[Tab] focus  [y] copy  [?] help  [q] quit",
            Style::default().fg(self.theme.secondary),
        ));

        let style = Style::default().bg(self.theme.surface);
        Paragraph::new(Line::from(spans)).style(style).render(area, buf);

        let clock_width = u16::try_from(visual_width(&self.content.clock)).unwrap_or(u16::MAX);
        if clock_width > 0 && clock_width < area.width {
            buf.set_string(
                area.right() - clock_width,
                area.y,
                &self.content.clock,
                style.fg(self.theme.subtext),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_status_bar_fields() {
        let content = StatusBarContent {
            focus: "Timeline".into(),
            autoscroll: AutoScrollState::ScrollingRight,
            last_action: Some("Executing action: start-backup".into()),
            clock: "12:34:56".into(),
        };
        let theme = Theme::default();
        let area = Rect::new(0, 0, 140, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&content, &theme).render(area, &mut buf);
        let out = buffer_to_string(&buf);

        assert!(out.starts_with("● Timeline │ auto: scrolling right"));
        assert!(out.contains("Executing action: start-backup"));
        assert!(out.ends_with("12:34:56"));
    }
}
