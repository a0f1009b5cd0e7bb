//! AI insights panel.

use infradash_core::Insight;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::Pane;
use crate::text::wrap;
use crate::theme::{BorderSet, IconSet, Theme};

/// Insight cards: title, timestamp and severity, wrapped description,
/// affected hosts.
pub struct InsightsPanel<'a> {
    insights: &'a [Insight],
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
    scroll: u16,
}

impl<'a> InsightsPanel<'a> {
    pub fn new(
        insights: &'a [Insight],
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            insights,
            theme,
            icons,
            borders,
            focused: false,
            scroll: 0,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Card lines for a content width.
    pub fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let body_width = usize::from(width.saturating_sub(2));
        let mut lines = Vec::new();

        for (i, insight) in self.insights.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let color = self.theme.severity_color(insight.severity);
            lines.push(Line::from(vec![
                Span::styled(self.icons.insight(insight.kind), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    insight.title.as_str(),
                    Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(insight.timestamp.as_str(), Style::default().fg(self.theme.muted)),
                Span::styled(" · ", Style::default().fg(self.theme.muted)),
                Span::styled(insight.severity.to_string(), Style::default().fg(color)),
            ]));
            for row in wrap(&insight.description, body_width) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(row, Style::default().fg(self.theme.subtext)),
                ]));
            }
            if !insight.affected_hosts.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("  Hosts: ", Style::default().fg(self.theme.muted)),
                    Span::styled(
                        insight.affected_hosts.join(", "),
                        Style::default().fg(self.theme.info),
                    ),
                ]));
            }
        }
        lines
    }
}

impl Widget for InsightsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(Pane::inner(area).width);
        Pane::new(self.theme, self.borders)
            .title("AI Insights")
            .focused(self.focused)
            .lines(lines)
            .scroll(self.scroll)
            .render(area, buf);
    }
}
