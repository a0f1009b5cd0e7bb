//! Edge-triggered auto-scroll for horizontally scrolling viewports.
//!
//! While the viewport is scrolled to within `threshold` columns of one of its
//! ends and the pointer is moving inside it, a repeating timer nudges the
//! scroll position further toward that end. Every tick re-reads the live
//! viewport metrics; there is no separate scroll model.
//!
//! The [`AutoScroller`] owns at most one [`TimerGuard`]. Dropping the guard
//! cancels the timer, so every exit path (state change, pointer leave,
//! teardown, drop) releases it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Default proximity zone width, in columns.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Default scroll advance per tick, in columns.
pub const DEFAULT_STEP: u32 = 5;

/// Default tick period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Live scroll metrics of a horizontally scrollable viewport.
pub trait ScrollViewport {
    /// Current scroll offset from the left edge of the content.
    fn scroll_left(&self) -> u32;
    /// Total content width.
    fn scroll_width(&self) -> u32;
    /// Visible width.
    fn client_width(&self) -> u32;
    /// Move the scroll offset.
    fn set_scroll_left(&mut self, value: u32);

    /// Largest reachable scroll offset.
    fn max_scroll_left(&self) -> u32 {
        self.scroll_width().saturating_sub(self.client_width())
    }

    /// Distance between the right edge of the visible area and the end of
    /// the content.
    fn distance_to_right(&self) -> u32 {
        self.scroll_width()
            .saturating_sub(self.scroll_left())
            .saturating_sub(self.client_width())
    }
}

/// Plain scroll metrics. `set_scroll_left` clamps into the reachable range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_left: u32,
    pub scroll_width: u32,
    pub client_width: u32,
}

impl ScrollMetrics {
    pub fn new(scroll_left: u32, scroll_width: u32, client_width: u32) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Update the content and visible widths, re-clamping the offset.
    pub fn resize(&mut self, scroll_width: u32, client_width: u32) {
        self.scroll_width = scroll_width;
        self.client_width = client_width;
        self.scroll_left = self.scroll_left.min(self.max_scroll_left());
    }

    /// Scroll by a signed amount, clamped.
    pub fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.scroll_left) + delta;
        let target = u32::try_from(target.max(0)).unwrap_or(u32::MAX);
        self.set_scroll_left(target);
    }
}

impl ScrollViewport for ScrollMetrics {
    fn scroll_left(&self) -> u32 {
        self.scroll_left
    }

    fn scroll_width(&self) -> u32 {
        self.scroll_width
    }

    fn client_width(&self) -> u32 {
        self.client_width
    }

    fn set_scroll_left(&mut self, value: u32) {
        self.scroll_left = value.min(self.max_scroll_left());
    }
}

/// Auto-scroll tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    /// Width of the proximity zone at each end.
    pub threshold: u32,
    /// Columns advanced per tick.
    pub step: u32,
    /// Tick period in milliseconds.
    pub interval_ms: u64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            step: DEFAULT_STEP,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl AutoScrollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Direction of an active auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Auto-scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoScrollState {
    #[default]
    Idle,
    ScrollingLeft,
    ScrollingRight,
}

impl std::fmt::Display for AutoScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::ScrollingLeft => write!(f, "scrolling left"),
            Self::ScrollingRight => write!(f, "scrolling right"),
        }
    }
}

/// Identifies one started timer. Ticks carry the id of the timer that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Handle to a running repeating timer. Cancels the timer when dropped.
pub struct TimerGuard {
    id: TimerId,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerGuard {
    /// Wrap a started timer with its cancellation.
    pub fn new(id: TimerId, cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancel the timer now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard").field("id", &self.id).finish()
    }
}

/// Something that can run repeating timers for an [`AutoScroller`].
///
/// Implementations deliver ticks for `id` every `period` until the returned
/// guard is dropped.
pub trait TimerSource: Send {
    fn start_repeating(&mut self, id: TimerId, period: Duration) -> TimerGuard;
}

#[derive(Debug, Default)]
struct ManualTimersInner {
    active: HashSet<TimerId>,
    started: usize,
    peak_active: usize,
}

/// Timer source whose ticks are delivered by the caller.
///
/// Records which timers are alive so callers can check for leaks. Clones
/// share state.
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    inner: Arc<Mutex<ManualTimersInner>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut ManualTimersInner) -> R) -> R {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }

    /// Number of timers currently running.
    pub fn active_count(&self) -> usize {
        self.with(|inner| inner.active.len())
    }

    /// Ids of running timers.
    pub fn active_ids(&self) -> Vec<TimerId> {
        self.with(|inner| inner.active.iter().copied().collect())
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.with(|inner| inner.active.contains(&id))
    }

    /// Total timers ever started.
    pub fn started_count(&self) -> usize {
        self.with(|inner| inner.started)
    }

    /// Largest number of timers that were running at the same time.
    pub fn peak_active(&self) -> usize {
        self.with(|inner| inner.peak_active)
    }
}

impl TimerSource for ManualTimers {
    fn start_repeating(&mut self, id: TimerId, _period: Duration) -> TimerGuard {
        self.with(|inner| {
            inner.active.insert(id);
            inner.started += 1;
            inner.peak_active = inner.peak_active.max(inner.active.len());
        });

        let inner = Arc::clone(&self.inner);
        TimerGuard::new(id, move || {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.active.remove(&id);
        })
    }
}

#[derive(Debug)]
struct ActiveScroll {
    direction: ScrollDirection,
    guard: TimerGuard,
}

/// Auto-scroll controller for one viewport instance.
pub struct AutoScroller {
    config: AutoScrollConfig,
    timers: Box<dyn TimerSource>,
    active: Option<ActiveScroll>,
    next_timer: u64,
}

impl std::fmt::Debug for AutoScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoScroller")
            .field("config", &self.config)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl AutoScroller {
    pub fn new(config: AutoScrollConfig, timers: impl TimerSource + 'static) -> Self {
        Self {
            config,
            timers: Box::new(timers),
            active: None,
            next_timer: 1,
        }
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    pub fn state(&self) -> AutoScrollState {
        match self.active.as_ref().map(|a| a.direction) {
            None => AutoScrollState::Idle,
            Some(ScrollDirection::Left) => AutoScrollState::ScrollingLeft,
            Some(ScrollDirection::Right) => AutoScrollState::ScrollingRight,
        }
    }

    /// Id of the running timer, if any.
    pub fn active_timer(&self) -> Option<TimerId> {
        self.active.as_ref().map(|a| a.guard.id())
    }

    /// Whether the viewport sits in the right proximity zone with room left
    /// to scroll.
    pub fn near_right(&self, viewport: &impl ScrollViewport) -> bool {
        viewport.distance_to_right() < self.config.threshold
            && viewport.scroll_left() < viewport.max_scroll_left()
    }

    /// Whether the viewport sits in the left proximity zone with room left
    /// to scroll.
    pub fn near_left(&self, viewport: &impl ScrollViewport) -> bool {
        viewport.scroll_left() < self.config.threshold && viewport.scroll_left() > 0
    }

    fn wanted_direction(&self, viewport: &impl ScrollViewport) -> Option<ScrollDirection> {
        if self.near_right(viewport) {
            Some(ScrollDirection::Right)
        } else if self.near_left(viewport) {
            Some(ScrollDirection::Left)
        } else {
            None
        }
    }

    /// Pointer moved inside the viewport.
    pub fn on_pointer_move(&mut self, viewport: &impl ScrollViewport) {
        let wanted = self.wanted_direction(viewport);
        let current = self.active.as_ref().map(|a| a.direction);

        if wanted == current {
            return;
        }

        // Old timer goes before a new one starts
        self.cancel();

        if let Some(direction) = wanted {
            self.start(direction);
        }
    }

    /// Pointer left the viewport.
    pub fn on_pointer_leave(&mut self) {
        self.cancel();
    }

    /// Handle one timer tick. Returns `true` if the scroll offset changed.
    pub fn on_tick(&mut self, id: TimerId, viewport: &mut impl ScrollViewport) -> bool {
        let Some(direction) = self
            .active
            .as_ref()
            .filter(|a| a.guard.id() == id)
            .map(|a| a.direction)
        else {
            tracing::trace!(?id, "ignoring stale auto-scroll tick");
            return false;
        };

        let before = viewport.scroll_left();
        match direction {
            ScrollDirection::Right => {
                if !self.near_right(viewport) {
                    self.cancel();
                    return false;
                }
                let target = before
                    .saturating_add(self.config.step)
                    .min(viewport.max_scroll_left());
                viewport.set_scroll_left(target);
                if viewport.scroll_left() >= viewport.max_scroll_left() {
                    self.cancel();
                }
            }
            ScrollDirection::Left => {
                if !self.near_left(viewport) {
                    self.cancel();
                    return false;
                }
                viewport.set_scroll_left(before.saturating_sub(self.config.step));
                if viewport.scroll_left() == 0 {
                    self.cancel();
                }
            }
        }

        viewport.scroll_left() != before
    }

    /// Stop any active auto-scroll.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(direction = ?active.direction, timer = ?active.guard.id(), "auto-scroll stopped");
            active.guard.cancel();
        }
    }

    /// Release the timer before the owning component goes away.
    pub fn teardown(&mut self) {
        self.cancel();
    }

    fn start(&mut self, direction: ScrollDirection) {
        debug_assert!(self.active.is_none());
        let id = TimerId(self.next_timer);
        self.next_timer += 1;

        let guard = self.timers.start_repeating(id, self.config.interval());
        tracing::debug!(?direction, timer = ?id, "auto-scroll started");
        self.active = Some(ActiveScroll { direction, guard });
    }
}

impl Drop for AutoScroller {
    fn drop(&mut self) {
        self.teardown();
    }
}
