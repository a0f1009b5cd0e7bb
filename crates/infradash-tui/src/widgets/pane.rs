//! Generic pane with border, title and scrollable line content.
//!
//! Supports focused/unfocused states with different border styles.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{BorderSet, Theme};

/// Generic pane with border and optional title.
pub struct Pane<'a> {
    title: Option<&'a str>,
    focused: bool,
    lines: Vec<Line<'a>>,
    scroll: u16,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane widget.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title: None,
            focused: false,
            lines: Vec::new(),
            scroll: 0,
            theme,
            borders,
        }
    }

    /// Set the pane title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the pane content.
    #[must_use]
    pub fn lines(mut self, lines: Vec<Line<'a>>) -> Self {
        self.lines = lines;
        self
    }

    /// Set the vertical scroll offset. Clamped when rendering.
    #[must_use]
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Content area inside the border.
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    fn block(&self) -> Block<'a> {
        let (border_set, border_style, title_style) = if self.focused {
            (
                self.borders.pane(true),
                Style::default().fg(self.theme.border_focused),
                Style::default().fg(self.theme.primary),
            )
        } else {
            (
                self.borders.pane(false),
                Style::default().fg(self.theme.border),
                Style::default().fg(self.theme.subtext),
            )
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style);

        if let Some(title) = self.title {
            block = block.title(format!(" {title} ")).title_style(title_style);
        }
        block
    }
}

/// Largest useful scroll offset for `line_count` lines in `height` rows.
pub fn max_scroll(line_count: usize, height: u16) -> u16 {
    u16::try_from(line_count.saturating_sub(usize::from(height))).unwrap_or(u16::MAX)
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let scroll = self.scroll.min(max_scroll(self.lines.len(), inner.height));
        Paragraph::new(self.lines)
            .style(Style::default().fg(self.theme.text))
            .scroll((scroll, 0))
            .render(inner, buf);
    }
}
