//! Timeline strip widget.
//!
//! Each marker gets a cell of [`CELL_WIDTH`] columns: an icon on the icon
//! row and the centred timestamp beneath it. Connectors join neighbouring
//! icons. The hovered marker's tooltip floats above its cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::state::{TimelineStrip, CELL_STRIDE, CELL_WIDTH};
use crate::text::{center, truncate_to_width, visual_width};
use crate::theme::{BorderSet, IconSet, Theme};
use infradash_core::{AutoScrollState, Marker};

/// Timeline strip widget.
pub struct TimelineWidget<'a> {
    strip: &'a TimelineStrip,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
}

impl<'a> TimelineWidget<'a> {
    pub fn new(
        strip: &'a TimelineStrip,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            strip,
            theme,
            icons,
            borders,
            focused: false,
        }
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Block around the strip. Shared with layout so hit-testing uses the
    /// same inner rectangle as rendering.
    pub fn block(theme: &Theme, borders: &BorderSet, focused: bool) -> Block<'static> {
        let (set, style) = if focused {
            (borders.pane(true), Style::default().fg(theme.border_focused))
        } else {
            (borders.pane(false), Style::default().fg(theme.border))
        };
        Block::default()
            .title(" Timeline ")
            .title_style(Style::default().fg(theme.text))
            .borders(Borders::ALL)
            .border_set(set)
            .border_style(style)
    }

    fn scroll_hint(&self) -> Option<&'static str> {
        match self.strip.autoscroll_state() {
            AutoScrollState::Idle => None,
            AutoScrollState::ScrollingLeft => Some(" « auto "),
            AutoScrollState::ScrollingRight => Some(" auto » "),
        }
    }

    /// Write `text` starting at content column `content_x`, clipped to the
    /// visible part of the strip.
    fn put_str(&self, buf: &mut Buffer, inner: Rect, content_x: u32, y: u16, text: &str, style: Style) {
        let scroll_left = i64::from(self.strip.scroll_left());
        let mut x = i64::from(content_x) - scroll_left;
        for ch in text.chars() {
            let w = i64::try_from(UnicodeWidthChar::width(ch).unwrap_or(0)).unwrap_or(0);
            if x >= 0 && x + w <= i64::from(inner.width) {
                let column = inner.x + u16::try_from(x).unwrap_or(u16::MAX);
                if let Some(cell) = buf.cell_mut((column, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
            x += w;
        }
    }

    fn render_markers(&self, inner: Rect, buf: &mut Buffer) {
        let (icon_row, time_row) = TimelineStrip::marker_rows(inner);
        let connector = self.icons.connector();
        let icon_offset = CELL_WIDTH / 2;
        let markers = self.strip.markers();

        for (index, marker) in markers.iter().enumerate() {
            let start = TimelineStrip::cell_start(index);
            let hovered = self.strip.is_hovered(marker.id);
            let color = self.theme.marker_color(marker.category);

            let mut icon_style = Style::default().fg(color);
            if hovered {
                icon_style = icon_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            self.put_str(buf, inner, start + icon_offset, icon_row, self.icons.marker(marker.category), icon_style);

            if index + 1 < markers.len() {
                let from = start + icon_offset + 2;
                let to = start + CELL_STRIDE + icon_offset - 1;
                let line = connector.repeat((to - from) as usize);
                self.put_str(buf, inner, from, icon_row, &line, Style::default().fg(self.theme.border));
            }

            if time_row < inner.bottom() {
                let time_style = if hovered {
                    Style::default().fg(self.theme.text)
                } else {
                    Style::default().fg(self.theme.muted)
                };
                let time = center(&marker.occurred_at, CELL_WIDTH as usize);
                self.put_str(buf, inner, start, time_row, &time, time_style);
            }
        }
    }

    fn render_tooltip(&self, marker: &Marker, index: usize, inner: Rect, buf: &mut Buffer) {
        let (icon_row, _) = TimelineStrip::marker_rows(inner);
        let anchor = i64::from(TimelineStrip::cell_start(index) + CELL_WIDTH / 2)
            - i64::from(self.strip.scroll_left());
        // Hovered cell scrolled out of view: nothing to point at
        if anchor < 0 || anchor >= i64::from(inner.width) {
            return;
        }

        if inner.height >= 6 {
            let content_width = visual_width(&marker.label).max(visual_width(&marker.occurred_at));
            let width = u16::try_from(content_width + 4)
                .unwrap_or(u16::MAX)
                .min(inner.width);
            let x = clamp_left(anchor - i64::from(width / 2), width, inner);
            let area = Rect::new(x, icon_row - 4, width, 4);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(self.borders.tooltip())
                .border_style(Style::default().fg(self.theme.marker_color(marker.category)));
            let text_width = usize::from(width.saturating_sub(4));
            let lines = vec![
                Line::from(Span::styled(
                    truncate_to_width(&marker.label, text_width),
                    Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&marker.occurred_at, text_width),
                    Style::default().fg(self.theme.subtext),
                )),
            ];

            Clear.render(area, buf);
            let content = block.inner(area);
            block.render(area, buf);
            Paragraph::new(lines).render(
                Rect::new(content.x + 1, content.y, content.width.saturating_sub(2), content.height),
                buf,
            );
        } else if icon_row > inner.y {
            let text = format!("{} · {}", marker.label, marker.occurred_at);
            let text = truncate_to_width(&text, usize::from(inner.width));
            let width = u16::try_from(visual_width(&text)).unwrap_or(inner.width);
            let x = clamp_left(anchor - i64::from(width / 2), width, inner);
            buf.set_string(x, inner.y, &text, Style::default().fg(self.theme.text));
        }
    }
}

/// Left edge for a box of `width` centred near `left`, kept inside `inner`.
fn clamp_left(left: i64, width: u16, inner: Rect) -> u16 {
    let max = i64::from(inner.width.saturating_sub(width));
    inner.x + u16::try_from(left.clamp(0, max)).unwrap_or(0)
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Self::block(self.theme, self.borders, self.focused);
        if let Some(hint) = self.scroll_hint() {
            block = block.title_top(
                Line::from(Span::styled(hint, Style::default().fg(self.theme.primary))).right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.strip.is_empty() {
            let msg = Line::from(Span::styled("No events", Style::default().fg(self.theme.muted)));
            Paragraph::new(msg).render(
                Rect::new(inner.x + 1, inner.y + inner.height / 2, inner.width.saturating_sub(1), 1),
                buf,
            );
            return;
        }

        self.render_markers(inner, buf);

        if let Some(marker) = self.strip.hovered() {
            if let Some(index) = self.strip.timeline().position(marker.id) {
                self.render_tooltip(marker, index, inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;
    use infradash_core::{AutoScrollConfig, EventCategory, ManualTimers, MarkerId, Timeline};

    fn strip(area: Rect) -> TimelineStrip {
        let timeline = Timeline::new(vec![
            Marker::new(1, EventCategory::Incident, "INC0042", "1/12/2025 18:00h"),
            Marker::new(2, EventCategory::Patch, "Patching", "1/13/2025 0:30h"),
            Marker::new(3, EventCategory::Backup, "Nightly backup", "1/13/2025 2:00h"),
        ]);
        let mut strip = TimelineStrip::new(timeline, AutoScrollConfig::default(), ManualTimers::new());
        let inner = TimelineWidget::block(&Theme::default(), &BorderSet::new(IconMode::Ascii), false)
            .inner(area);
        strip.set_area(inner);
        strip
    }

    fn render(strip: &TimelineStrip, area: Rect) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(strip, &theme, &icons, &borders).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_renders_markers_without_tooltips() {
        let area = Rect::new(0, 0, 70, 8);
        let strip = strip(area);
        let out = render(&strip, area);

        assert!(out.contains("Timeline"));
        assert!(out.contains("1/12/2025 18:00h"));
        assert!(out.contains("1/13/2025 0:30h"));
        assert!(out.contains('!'));
        assert!(out.contains('P'));
        assert!(!out.contains("INC0042"));
        assert!(!out.contains("Patching"));
    }

    #[test]
    fn test_hovered_marker_shows_tooltip() {
        let area = Rect::new(0, 0, 70, 8);
        let mut strip = strip(area);
        strip.pointer_entered_marker(MarkerId(2));
        let out = render(&strip, area);

        assert!(out.contains("Patching"));
        assert!(!out.contains("INC0042"));
        assert!(!out.contains("Nightly backup"));
    }

    #[test]
    fn test_short_strip_uses_inline_tooltip() {
        let area = Rect::new(0, 0, 70, 5);
        let mut strip = strip(area);
        strip.pointer_entered_marker(MarkerId(1));
        let out = render(&strip, area);

        assert!(out.contains("INC0042 · 1/12/2025 18:00h"));
    }

    #[test]
    fn test_scrolled_strip_hides_first_marker() {
        let area = Rect::new(0, 0, 30, 8);
        let mut strip = strip(area);
        strip.scroll_by(20);
        let out = render(&strip, area);

        assert!(!out.contains("1/12/2025 18:00h"));
        assert!(out.contains("1/13/2025 0:30h"));
    }

    #[test]
    fn test_tooltip_hidden_when_hovered_cell_scrolled_away() {
        let area = Rect::new(0, 0, 30, 8);
        let timeline = Timeline::new(
            (1..=10)
                .map(|i| Marker::new(i, EventCategory::Patch, format!("Label{i}"), format!("T{i}")))
                .collect(),
        );
        let mut strip = TimelineStrip::new(timeline, AutoScrollConfig::default(), ManualTimers::new());
        strip.set_area(Rect::new(1, 1, 28, 6));
        strip.pointer_entered_marker(MarkerId(1));
        strip.scroll_by(120);
        let out = render(&strip, area);

        assert_eq!(strip.hovered_id(), Some(MarkerId(1)));
        assert!(out.contains("T7"));
        assert!(!out.contains("Label1"));

        strip.scroll_by(-120);
        let out = render(&strip, area);
        assert!(out.contains("Label1"));
    }

    #[test]
    fn test_one_cell_per_marker_in_order() {
        let area = Rect::new(0, 0, 70, 8);
        let timeline = Timeline::new(
            (1..=3)
                .map(|i| Marker::new(i, EventCategory::Unknown, format!("Event {i}"), format!("T{i}")))
                .collect(),
        );
        let mut strip = TimelineStrip::new(timeline, AutoScrollConfig::default(), ManualTimers::new());
        strip.set_area(Rect::new(1, 1, 68, 6));
        let out = render(&strip, area);

        // Unknown categories fall back to the neutral icon
        assert_eq!(out.matches('o').count(), 3);
        let positions: Vec<usize> = ["T1", "T2", "T3"]
            .iter()
            .map(|t| out.find(t).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hovering_another_marker_replaces_tooltip() {
        let area = Rect::new(0, 0, 70, 8);
        let mut strip = strip(area);
        strip.pointer_entered_marker(MarkerId(1));
        assert!(render(&strip, area).contains("INC0042"));

        strip.pointer_entered_marker(MarkerId(3));
        let out = render(&strip, area);
        assert!(out.contains("Nightly backup"));
        assert!(!out.contains("INC0042"));
        assert!(!out.contains("Patching"));
    }

    #[test]
    fn test_empty_timeline() {
        let area = Rect::new(0, 0, 40, 6);
        let strip = TimelineStrip::new(Timeline::default(), AutoScrollConfig::default(), ManualTimers::new());
        let out = render(&strip, area);
        assert!(out.contains("No events"));
    }

    #[test]
    fn test_autoscroll_hint_in_title() {
        let area = Rect::new(0, 0, 30, 8);
        let mut strip = strip(area);
        // Content 58 wide, viewport 28: distance to right is 5 at 25
        strip.scroll_by(25);
        strip.pointer_moved(10, 3);
        let out = render(&strip, area);
        assert!(out.contains("auto »"));
    }
}
