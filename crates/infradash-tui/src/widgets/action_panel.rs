//! Action buttons.

use infradash_core::DashboardAction;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::Pane;
use crate::theme::{BorderSet, IconSet, Theme};

/// Button under a screen row, given the panel's inner area. One button per
/// row in [`DashboardAction::ALL`] order.
pub fn action_at(inner: Rect, column: u16, row: u16) -> Option<DashboardAction> {
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }
    DashboardAction::ALL.get(usize::from(row - inner.y)).copied()
}

/// Action panel widget.
pub struct ActionPanel<'a> {
    selected: usize,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
}

impl<'a> ActionPanel<'a> {
    pub fn new(selected: usize, theme: &'a Theme, icons: &'a IconSet, borders: &'a BorderSet) -> Self {
        Self {
            selected,
            theme,
            icons,
            borders,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        DashboardAction::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let selected = i == self.selected;
                let marker = if selected && self.focused {
                    self.icons.selected()
                } else {
                    " "
                };
                let style = if selected && self.focused {
                    Style::default().fg(self.theme.base).bg(self.theme.primary).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.text)
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(self.theme.primary)),
                    Span::styled(format!(" {} {} ", self.icons.action(*action), action.label()), style),
                ])
            })
            .collect()
    }
}

impl Widget for ActionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Pane::new(self.theme, self.borders)
            .title("Actions")
            .focused(self.focused)
            .lines(self.lines())
            .render(area, buf);
    }
}
