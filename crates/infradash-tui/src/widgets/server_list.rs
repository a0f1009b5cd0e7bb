//! Server inventory panel.

use infradash_core::ServerNode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::Pane;
use crate::theme::{BorderSet, IconSet, Theme};

/// Server list widget. Two lines per host.
pub struct ServerList<'a> {
    servers: &'a [ServerNode],
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
    scroll: u16,
}

impl<'a> ServerList<'a> {
    pub fn new(
        servers: &'a [ServerNode],
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            servers,
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
        let mut lines = Vec::with_capacity(self.servers.len() * 2);
        for server in self.servers {
            let color = self.theme.health_color(server.status);
            lines.push(Line::from(vec![
                Span::styled(self.icons.health(server.status), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    server.hostname.as_str(),
                    Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format!("App: {}", server.application_id),
                    Style::default().fg(self.theme.subtext),
                ),
                Span::raw("  "),
                Span::styled(server.ip_address.as_str(), Style::default().fg(self.theme.muted)),
            ]));
        }
        lines
    }
}

impl Widget for ServerList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("{} Servers ({})", self.icons.server(), self.servers.len());
        Pane::new(self.theme, self.borders)
            .title(&title)
            .focused(self.focused)
            .lines(self.lines())
            .scroll(self.scroll)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use infradash_core::mock_servers;

    #[test]
    fn test_server_rows() {
        let servers = mock_servers();
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let list = ServerList::new(&servers, &theme, &icons, &borders);
        assert_eq!(list.lines().len(), servers.len() * 2);

        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf);
        let out = buffer_to_string(&buf);

        assert!(out.contains("Servers (9)"));
        assert!(out.contains("[ok] app-server-01"));
        assert!(out.contains("App: APP001  10.0.1.101"));
        assert!(out.contains("[!] db-server-01"));
    }
}
