//! Route-trace panel.

use infradash_core::{RouteStatus, RouteTest};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::Pane;
use crate::theme::{BorderSet, IconSet, Theme};

/// Shown under a trace that never reached its destination.
pub const INCOMPLETE_MESSAGE: &str = "Route trace incomplete - destination unreachable";

fn status_label(status: RouteStatus) -> &'static str {
    match status {
        RouteStatus::Success => "success",
        RouteStatus::Warning => "warning",
        RouteStatus::Failed => "failed",
    }
}

/// Plain-text rendering of one trace, also used for copying.
pub fn trace_lines(route: &RouteTest) -> Vec<String> {
    let mut lines = vec![
        format!("{} → {}", route.source, route.destination),
        format!("{} · {}", status_label(route.status), route.timestamp),
    ];
    lines.extend(
        route
            .hops
            .iter()
            .map(|hop| format!("  {}. {} {}", hop.hop, hop.address, hop.latency_label())),
    );
    if route.is_incomplete() {
        lines.push(format!("  {INCOMPLETE_MESSAGE}"));
    }
    lines
}

/// Route tests widget.
pub struct RouteTests<'a> {
    routes: &'a [RouteTest],
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
    scroll: u16,
}

impl<'a> RouteTests<'a> {
    pub fn new(
        routes: &'a [RouteTest],
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            routes,
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

    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (i, route) in self.routes.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let color = self.theme.route_color(route.status);
            lines.push(Line::from(vec![
                Span::styled(self.icons.network(), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    format!("{} → {}", route.source, route.destination),
                    Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(status_label(route.status), Style::default().fg(color)),
                Span::styled(
                    format!(" · {}", route.timestamp),
                    Style::default().fg(self.theme.muted),
                ),
            ]));
            for hop in &route.hops {
                let latency_style = if hop.responded() {
                    Style::default().fg(self.theme.subtext)
                } else {
                    Style::default().fg(self.theme.error)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}. ", hop.hop), Style::default().fg(self.theme.muted)),
                    Span::styled(hop.address.clone(), Style::default().fg(self.theme.text)),
                    Span::raw(" "),
                    Span::styled(hop.latency_label(), latency_style),
                ]));
            }
            if route.is_incomplete() {
                lines.push(Line::from(Span::styled(
                    format!("  {INCOMPLETE_MESSAGE}"),
                    Style::default().fg(self.theme.error),
                )));
            }
        }
        lines
    }
}

impl Widget for RouteTests<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Pane::new(self.theme, self.borders)
            .title("Route Tests")
            .focused(self.focused)
            .lines(self.lines())
            .scroll(self.scroll)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infradash_core::mock_routes;
    use insta::assert_snapshot;

    #[test]
    fn test_failed_trace_snapshot() {
        let routes = mock_routes();
        let text = trace_lines(&routes[2]).join("\n");
        assert_snapshot!("route_trace_failed", text);
    }

    #[test]
    fn test_successful_trace_has_no_incomplete_line() {
        let routes = mock_routes();
        let lines = trace_lines(&routes[0]);
        assert_eq!(lines[0], "192.168.1.1 → app-server-01");
        assert_eq!(lines[2], "  1. 192.168.1.1 0.5ms");
        assert_eq!(lines.len(), 6);
        assert!(!lines.iter().any(|l| l.contains(INCOMPLETE_MESSAGE)));
    }

    #[test]
    fn test_widget_lines_match_routes() {
        let routes = mock_routes();
        let theme = Theme::default();
        let icons = IconSet::default();
        let borders = BorderSet::default();
        let widget = RouteTests::new(&routes, &theme, &icons, &borders);

        // Header, status, hops, separators, one incomplete notice
        let hops: usize = routes.iter().map(|r| r.hops.len()).sum();
        assert_eq!(widget.lines().len(), routes.len() * 2 + hops + (routes.len() - 1) + 1);
    }
}
