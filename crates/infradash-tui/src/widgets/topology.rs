//! Topology map.
//!
//! Edges are drawn on a ratatui [`Canvas`]; node labels are written over it
//! at cells scaled from the static plane coordinates, so hit-testing and
//! rendering share [`label_area`].

use infradash_core::{Topology, TopologyNode, PLANE_SIZE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Clear, Paragraph, Widget,
    },
};

use super::Pane;
use crate::text::{truncate_to_width, visual_width};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};

/// Label text for a node.
fn label(node: &TopologyNode, icons: &IconSet) -> String {
    format!("{} {}", icons.node(node.kind), node.id)
}

/// Scale a plane coordinate into `len` cells starting at `origin`.
fn scale(value: f64, origin: u16, len: u16) -> u16 {
    let span = f64::from(len.saturating_sub(1));
    let offset = (value / PLANE_SIZE * span).round().clamp(0.0, span);
    // Clamped to 0..=span, which fits in u16
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = offset as u16;
    origin + offset
}

/// One-row rectangle holding a node's label inside `inner`.
pub fn label_area(node: &TopologyNode, icons: &IconSet, inner: Rect) -> Rect {
    let width = u16::try_from(visual_width(&label(node, icons)))
        .unwrap_or(u16::MAX)
        .min(inner.width);
    let (x, y) = node.position;
    let center = scale(x, inner.x, inner.width);
    let left = center
        .saturating_sub(width / 2)
        .clamp(inner.x, inner.right().saturating_sub(width));
    Rect::new(left, scale(y, inner.y, inner.height), width, 1)
}

/// Row under a node's label listing its applications, if it fits.
pub fn applications_area(node: &TopologyNode, icons: &IconSet, inner: Rect) -> Option<Rect> {
    let label = label_area(node, icons, inner);
    let row = label.y + 1;
    if row >= inner.bottom() || node.applications.is_empty() {
        return None;
    }
    let width = u16::try_from(visual_width(&node.applications.join(", ")))
        .unwrap_or(u16::MAX)
        .min(inner.width);
    let center = label.x + label.width / 2;
    let left = center
        .saturating_sub(width / 2)
        .clamp(inner.x, inner.right().saturating_sub(width));
    Some(Rect::new(left, row, width, 1))
}

/// Index of the node whose label is under a screen position.
pub fn node_at(topology: &Topology, icons: &IconSet, inner: Rect, column: u16, row: u16) -> Option<usize> {
    // Later labels are drawn on top
    topology.nodes.iter().rposition(|node| {
        let area = label_area(node, icons, inner);
        row == area.y && column >= area.x && column < area.right()
    })
}

/// Topology widget.
pub struct TopologyMap<'a> {
    topology: &'a Topology,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    focused: bool,
    hovered: Option<usize>,
}

impl<'a> TopologyMap<'a> {
    pub fn new(
        topology: &'a Topology,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            topology,
            theme,
            icons,
            borders,
            focused: false,
            hovered: None,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Node whose issues tooltip is shown.
    #[must_use]
    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    fn render_edges(&self, inner: Rect, buf: &mut Buffer) {
        let marker = match self.icons.mode() {
            IconMode::Ascii => symbols::Marker::Dot,
            IconMode::Nerd | IconMode::Unicode => symbols::Marker::Braille,
        };
        let segments: Vec<_> = self
            .topology
            .edge_segments()
            .map(|(edge, from, to)| CanvasLine {
                x1: from.0,
                y1: PLANE_SIZE - from.1,
                x2: to.0,
                y2: PLANE_SIZE - to.1,
                color: self.theme.edge_color(edge.kind),
            })
            .collect();

        Canvas::default()
            .marker(marker)
            .x_bounds([0.0, PLANE_SIZE])
            .y_bounds([0.0, PLANE_SIZE])
            .paint(|ctx| {
                for segment in &segments {
                    ctx.draw(segment);
                }
            })
            .render(inner, buf);
    }

    fn render_labels(&self, inner: Rect, buf: &mut Buffer) {
        // Application lines first so a crowded label always wins
        for node in &self.topology.nodes {
            if let Some(area) = applications_area(node, self.icons, inner) {
                let text = truncate_to_width(&node.applications.join(", "), usize::from(area.width));
                buf.set_string(area.x, area.y, text, Style::default().fg(self.theme.muted));
            }
        }

        for (index, node) in self.topology.nodes.iter().enumerate() {
            let area = label_area(node, self.icons, inner);
            let mut style = Style::default().fg(self.theme.node_color(node.kind, node.status));
            if self.hovered == Some(index) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let text = truncate_to_width(&label(node, self.icons), usize::from(area.width));
            buf.set_string(area.x, area.y, text, style);
        }
    }

    fn render_issues(&self, node: &TopologyNode, inner: Rect, buf: &mut Buffer) {
        let issues = self.topology.issues_for(&node.id);
        if issues.is_empty() {
            return;
        }

        let title = format!("Issues for {}", node.id);
        let mut lines = vec![Line::from(Span::styled(
            title.clone(),
            Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
        ))];
        let mut width = visual_width(&title);
        for issue in &issues {
            let row = format!("• {}", issue.title);
            width = width.max(visual_width(&row));
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(self.theme.severity_color(issue.severity)),
            )));
        }

        let width = u16::try_from(width + 4).unwrap_or(u16::MAX).min(inner.width);
        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX).min(inner.height);
        let anchor = label_area(node, self.icons, inner);
        let x = anchor.x.min(inner.right().saturating_sub(width));
        let y = if anchor.y + 1 + height <= inner.bottom() {
            anchor.y + 1
        } else {
            anchor.y.saturating_sub(height).max(inner.y)
        };
        let area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.tooltip())
            .border_style(Style::default().fg(self.theme.warning));
        Clear.render(area, buf);
        let content = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines).render(
            Rect::new(content.x + 1, content.y, content.width.saturating_sub(2), content.height),
            buf,
        );
    }
}

impl Widget for TopologyMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Pane::new(self.theme, self.borders)
            .title("Topology")
            .focused(self.focused)
            .render(area, buf);
        let inner = Pane::inner(area);
        if inner.width < 2 || inner.height < 2 {
            return;
        }

        self.render_edges(inner, buf);
        self.render_labels(inner, buf);

        if let Some(node) = self.hovered.and_then(|i| self.topology.nodes.get(i)) {
            self.render_issues(node, inner, buf);
        }
    }
}
