//! Timeline strip state.
//!
//! Owns the marker sequence, the live scroll metrics of the strip viewport,
//! the hovered marker and the auto-scroller.

use infradash_core::{
    AutoScrollConfig, AutoScrollState, AutoScroller, HoverState, Marker, MarkerId,
    ScrollMetrics, ScrollViewport, TimerId, TimerSource, Timeline,
};
use ratatui::layout::Rect;

/// Width of one marker cell in columns.
pub const CELL_WIDTH: u32 = 18;

/// Gap between marker cells.
pub const CELL_GAP: u32 = 2;

/// Horizontal distance between the starts of consecutive cells.
pub const CELL_STRIDE: u32 = CELL_WIDTH + CELL_GAP;

/// Columns scrolled per mouse wheel notch.
pub const SCROLL_SPEED: i64 = 4;

/// Timeline strip state.
#[derive(Debug)]
pub struct TimelineStrip {
    timeline: Timeline,
    viewport: ScrollMetrics,
    hover: HoverState<MarkerId>,
    scroller: AutoScroller,
    /// Viewport rectangle from the last layout pass.
    area: Rect,
}

impl TimelineStrip {
    /// Create a strip over an immutable marker sequence.
    pub fn new(
        timeline: Timeline,
        config: AutoScrollConfig,
        timers: impl TimerSource + 'static,
    ) -> Self {
        let mut strip = Self {
            timeline,
            viewport: ScrollMetrics::default(),
            hover: HoverState::new(),
            scroller: AutoScroller::new(config, timers),
            area: Rect::default(),
        };
        strip.viewport.resize(strip.content_width(), 0);
        strip
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn markers(&self) -> &[Marker] {
        self.timeline.markers()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Live scroll metrics.
    pub fn viewport(&self) -> &ScrollMetrics {
        &self.viewport
    }

    pub fn scroll_left(&self) -> u32 {
        self.viewport.scroll_left
    }

    /// Viewport rectangle from the last layout pass.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn autoscroll_state(&self) -> AutoScrollState {
        self.scroller.state()
    }

    pub fn active_timer(&self) -> Option<TimerId> {
        self.scroller.active_timer()
    }

    pub fn hovered_id(&self) -> Option<MarkerId> {
        self.hover.hovered().copied()
    }

    /// The marker whose tooltip is showing.
    pub fn hovered(&self) -> Option<&Marker> {
        self.hovered_id().and_then(|id| self.timeline.find(id))
    }

    /// Whether the tooltip for `id` is visible.
    pub fn is_hovered(&self, id: MarkerId) -> bool {
        self.hover.is_hovered(&id)
    }

    /// Total width of all marker cells.
    pub fn content_width(&self) -> u32 {
        match u32::try_from(self.timeline.len()) {
            Ok(0) => 0,
            Ok(n) => n * CELL_STRIDE - CELL_GAP,
            Err(_) => u32::MAX,
        }
    }

    /// Content x-coordinate where the cell at `index` starts.
    pub fn cell_start(index: usize) -> u32 {
        u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(CELL_STRIDE))
    }

    /// Rows of the viewport holding marker icons and timestamps.
    pub fn marker_rows(area: Rect) -> (u16, u16) {
        let icon_row = area.y + area.height.saturating_sub(2);
        (icon_row, icon_row + 1)
    }

    /// Record the viewport rectangle from layout.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.viewport
            .resize(self.content_width(), u32::from(area.width));
    }

    /// Marker under a screen position, if any.
    pub fn marker_at(&self, column: u16, row: u16) -> Option<MarkerId> {
        if !self.contains(column, row) {
            return None;
        }
        let (icon_row, time_row) = Self::marker_rows(self.area);
        if row != icon_row && row != time_row {
            return None;
        }

        let content_x = self.viewport.scroll_left + u32::from(column - self.area.x);
        if content_x % CELL_STRIDE >= CELL_WIDTH {
            return None;
        }
        let index = usize::try_from(content_x / CELL_STRIDE).ok()?;
        self.timeline.get(index).map(|m| m.id)
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        let area = self.area;
        column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
    }

    /// Pointer moved to a screen position.
    ///
    /// Outside the viewport this is a pointer leave. Inside, hover follows
    /// the marker under the pointer and the auto-scroller re-checks the
    /// scroll boundaries.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        if !self.contains(column, row) {
            self.pointer_left();
            return;
        }

        self.hover.retarget(self.marker_at(column, row));
        self.scroller.on_pointer_move(&self.viewport);
    }

    /// Pointer left the viewport.
    pub fn pointer_left(&mut self) {
        self.hover.clear();
        self.scroller.on_pointer_leave();
    }

    pub fn pointer_entered_marker(&mut self, id: MarkerId) {
        self.hover.enter(id);
    }

    pub fn pointer_left_marker(&mut self, id: MarkerId) {
        self.hover.leave(&id);
    }

    /// Deliver an auto-scroll timer tick. Returns `true` if the strip moved.
    pub fn on_timer_tick(&mut self, id: TimerId) -> bool {
        self.scroller.on_tick(id, &mut self.viewport)
    }

    /// Scroll by a number of columns (mouse wheel, keyboard).
    pub fn scroll_by(&mut self, delta: i64) {
        self.viewport.scroll_by(delta);
    }

    /// Hover the next marker. Starts at the first one.
    pub fn hover_next(&mut self) {
        let next = match self.hovered_index() {
            Some(i) => (i + 1).min(self.timeline.len().saturating_sub(1)),
            None => 0,
        };
        self.hover_index(next);
    }

    /// Hover the previous marker. Starts at the last one.
    pub fn hover_prev(&mut self) {
        let prev = match self.hovered_index() {
            Some(i) => i.saturating_sub(1),
            None => self.timeline.len().saturating_sub(1),
        };
        self.hover_index(prev);
    }

    pub fn hover_first(&mut self) {
        self.hover_index(0);
    }

    pub fn hover_last(&mut self) {
        self.hover_index(self.timeline.len().saturating_sub(1));
    }

    fn hovered_index(&self) -> Option<usize> {
        self.hovered_id().and_then(|id| self.timeline.position(id))
    }

    fn hover_index(&mut self, index: usize) {
        let Some(id) = self.timeline.get(index).map(|m| m.id) else {
            return;
        };
        self.hover.enter(id);
        self.ensure_visible(index);
    }

    /// Scroll so the cell at `index` is fully inside the viewport.
    pub fn ensure_visible(&mut self, index: usize) {
        let start = Self::cell_start(index);
        let end = start.saturating_add(CELL_WIDTH);
        let left = self.viewport.scroll_left();
        let client = self.viewport.client_width();

        if start < left {
            self.viewport.set_scroll_left(start);
        } else if end > left + client {
            self.viewport.set_scroll_left(end.saturating_sub(client));
        }
    }

    /// Stop auto-scroll and drop hover before the strip goes away.
    pub fn teardown(&mut self) {
        self.scroller.teardown();
        self.hover.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infradash_core::{EventCategory, ManualTimers};

    fn timeline(count: u64) -> Timeline {
        Timeline::new(
            (1..=count)
                .map(|i| {
                    Marker::new(i, EventCategory::Incident, format!("Event {i}"), format!("t{i}"))
                })
                .collect(),
        )
    }

    fn strip(count: u64, width: u16) -> (TimelineStrip, ManualTimers) {
        let timers = ManualTimers::new();
        let mut strip = TimelineStrip::new(timeline(count), AutoScrollConfig::default(), timers.clone());
        strip.set_area(Rect::new(0, 0, width, 6));
        (strip, timers)
    }

    #[test]
    fn test_content_width() {
        let (strip, _) = strip(3, 40);
        assert_eq!(strip.content_width(), 58);

        let (empty, _) = strip_empty();
        assert_eq!(empty.content_width(), 0);
    }

    fn strip_empty() -> (TimelineStrip, ManualTimers) {
        strip(0, 40)
    }

    #[test]
    fn test_marker_at() {
        let (strip, _) = strip(5, 40);
        // Marker rows are the last two rows of the viewport
        assert_eq!(strip.marker_at(0, 4), Some(MarkerId(1)));
        assert_eq!(strip.marker_at(17, 5), Some(MarkerId(1)));
        // Gap between cells
        assert_eq!(strip.marker_at(18, 4), None);
        assert_eq!(strip.marker_at(20, 4), Some(MarkerId(2)));
        // Tooltip rows are not part of a cell
        assert_eq!(strip.marker_at(0, 1), None);
        // Outside the viewport
        assert_eq!(strip.marker_at(45, 4), None);
    }

    #[test]
    fn test_marker_at_respects_scroll() {
        let (mut strip, _) = strip(5, 40);
        strip.scroll_by(20);
        assert_eq!(strip.marker_at(0, 4), Some(MarkerId(2)));
    }

    #[test]
    fn test_pointer_hover_follows_marker() {
        let (mut strip, _) = strip(5, 40);
        strip.pointer_moved(2, 4);
        assert_eq!(strip.hovered_id(), Some(MarkerId(1)));

        strip.pointer_moved(22, 4);
        assert_eq!(strip.hovered_id(), Some(MarkerId(2)));
        assert!(!strip.is_hovered(MarkerId(1)));

        // Gap clears the hover
        strip.pointer_moved(19, 4);
        assert_eq!(strip.hovered_id(), None);

        strip.pointer_moved(2, 4);
        strip.pointer_moved(50, 50);
        assert_eq!(strip.hovered_id(), None);
    }

    #[test]
    fn test_pointer_near_right_end_autoscrolls() {
        // 60 markers: content 1198 wide, viewport 200
        let (mut strip, timers) = strip(60, 200);
        strip.scroll_by(993);
        assert_eq!(strip.viewport().distance_to_right(), 5);

        strip.pointer_moved(100, 0);
        assert_eq!(strip.autoscroll_state(), AutoScrollState::ScrollingRight);

        let id = strip.active_timer().unwrap();
        assert!(strip.on_timer_tick(id));
        assert_eq!(strip.scroll_left(), 998);
        assert_eq!(strip.autoscroll_state(), AutoScrollState::Idle);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_pointer_leave_cancels_autoscroll() {
        let (mut strip, timers) = strip(60, 200);
        strip.scroll_by(993);
        strip.pointer_moved(100, 0);
        assert_eq!(timers.active_count(), 1);

        strip.pointer_moved(100, 30);
        assert_eq!(strip.autoscroll_state(), AutoScrollState::Idle);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_content_narrower_than_viewport_never_scrolls() {
        let (mut strip, timers) = strip(2, 200);
        strip.pointer_moved(5, 4);
        strip.scroll_by(50);
        assert_eq!(strip.scroll_left(), 0);
        assert_eq!(timers.started_count(), 0);
    }

    #[test]
    fn test_empty_strip() {
        let (mut strip, timers) = strip_empty();
        strip.pointer_moved(5, 4);
        strip.hover_next();
        assert_eq!(strip.hovered_id(), None);
        assert_eq!(timers.started_count(), 0);
    }

    #[test]
    fn test_keyboard_hover_scrolls_into_view() {
        let (mut strip, _) = strip(10, 40);
        strip.hover_last();
        assert_eq!(strip.hovered_id(), Some(MarkerId(10)));
        // Cell 9 spans 180..198; viewport must end at 198
        assert_eq!(strip.scroll_left(), 158);

        strip.hover_first();
        assert_eq!(strip.hovered_id(), Some(MarkerId(1)));
        assert_eq!(strip.scroll_left(), 0);
    }

    #[test]
    fn test_hover_next_prev_clamp() {
        let (mut strip, _) = strip(3, 40);
        strip.hover_next();
        assert_eq!(strip.hovered_id(), Some(MarkerId(1)));
        strip.hover_prev();
        assert_eq!(strip.hovered_id(), Some(MarkerId(1)));

        strip.hover_next();
        strip.hover_next();
        strip.hover_next();
        assert_eq!(strip.hovered_id(), Some(MarkerId(3)));
    }

    #[test]
    fn test_enter_leave_marker() {
        let (mut strip, _) = strip(3, 40);
        strip.pointer_entered_marker(MarkerId(2));
        assert!(strip.is_hovered(MarkerId(2)));
        assert_eq!(strip.hovered().map(|m| m.label.as_str()), Some("Event 2"));

        strip.pointer_left_marker(MarkerId(2));
        assert_eq!(strip.hovered(), None);
    }

    #[test]
    fn test_teardown_releases_timer() {
        let (mut strip, timers) = strip(60, 200);
        strip.scroll_by(993);
        strip.pointer_moved(100, 0);
        let id = strip.active_timer().unwrap();

        strip.teardown();
        assert_eq!(timers.active_count(), 0);
        assert!(!strip.on_timer_tick(id));
        assert_eq!(strip.scroll_left(), 993);
    }

    #[test]
    fn test_drop_releases_timer() {
        let (mut strip, timers) = strip(60, 200);
        strip.scroll_by(993);
        strip.pointer_moved(100, 0);
        drop(strip);
        assert_eq!(timers.active_count(), 0);
    }
}
