//! Application state and update logic for the infradash TUI.

use crate::event::Action;
use crate::layout::{self, dashboard_layout, DashboardRegions};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::timeline::{TimelineStrip, SCROLL_SPEED};
use crate::widgets::{action_at, max_scroll, node_at, trace_lines, InsightsPanel, Pane, RouteTests};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use infradash_core::{
    mock_insights, mock_routes, mock_servers, ActionExecutor, DashboardAction, DashboardConfig,
    HoverState, Insight, LoggingExecutor, RouteTest, ServerNode, TimerId, TimerSource, Timeline,
    Topology,
};
use ratatui::layout::Rect;

/// Ticks a notification stays in the status bar.
const NOTIFICATION_TICKS: usize = 12;

/// Focusable panes, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    Insights,
    Actions,
    Topology,
    Servers,
    Routes,
    #[default]
    Timeline,
}

impl FocusedPane {
    pub const ALL: [FocusedPane; 6] = [
        Self::Insights,
        Self::Actions,
        Self::Topology,
        Self::Servers,
        Self::Routes,
        Self::Timeline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Insights => "Insights",
            Self::Actions => "Actions",
            Self::Topology => "Topology",
            Self::Servers => "Servers",
            Self::Routes => "Routes",
            Self::Timeline => "Timeline",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Everything the dashboard starts from.
#[derive(Debug, Clone)]
pub struct DashboardSetup {
    pub config: DashboardConfig,
    pub timeline: Timeline,
    pub icon_mode: IconMode,
}

impl DashboardSetup {
    /// Setup for a loaded config. Icons honour `NO_COLOR`.
    pub fn new(config: DashboardConfig, timeline: Timeline) -> Self {
        let icon_mode = IconMode::from_env(config.icons);
        Self {
            config,
            timeline,
            icon_mode,
        }
    }
}

impl Default for DashboardSetup {
    fn default() -> Self {
        Self::new(DashboardConfig::default(), Timeline::mock())
    }
}

/// Vertical scroll offsets of the list panes.
#[derive(Debug, Clone, Copy, Default)]
struct PaneScroll {
    offset: u16,
    max: u16,
}

impl PaneScroll {
    fn by(&mut self, delta: i32) {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max));
        self.offset = u16::try_from(target).unwrap_or(0);
    }

    fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }
}

/// Application state.
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    pub focus: FocusedPane,

    pub timeline: TimelineStrip,
    pub servers: Vec<ServerNode>,
    pub insights: Vec<Insight>,
    pub routes: Vec<RouteTest>,
    pub topology: Topology,

    /// Topology node under the pointer (or picked with the keyboard).
    pub topology_hover: HoverState<usize>,

    /// Highlighted action button.
    pub selected_action: usize,

    /// Last dispatched action.
    pub last_action: Option<DashboardAction>,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,
    notification_ttl: usize,

    /// Local time shown in the status bar, refreshed on tick.
    pub clock: String,

    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,

    insights_scroll: PaneScroll,
    servers_scroll: PaneScroll,
    routes_scroll: PaneScroll,

    executor: Box<dyn ActionExecutor>,
    regions: DashboardRegions,
    pointer_in_timeline: bool,
    pointer_in_topology: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("focus", &self.focus)
            .field("timeline", &self.timeline)
            .field("last_action", &self.last_action)
            .field("regions", &self.regions)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create a new app instance.
    pub fn new(setup: DashboardSetup, timers: impl TimerSource + 'static) -> Self {
        let DashboardSetup {
            config,
            timeline,
            icon_mode,
        } = setup;

        tracing::debug!(markers = timeline.len(), ?icon_mode, "creating dashboard");

        Self {
            should_quit: false,
            show_help: false,
            focus: FocusedPane::default(),
            timeline: TimelineStrip::new(timeline, config.autoscroll, timers),
            servers: mock_servers(),
            insights: mock_insights(),
            routes: mock_routes(),
            topology: Topology::mock(),
            topology_hover: HoverState::new(),
            selected_action: 0,
            last_action: None,
            notification: None,
            notification_ttl: 0,
            clock: String::new(),
            theme: Theme::from_name(config.theme),
            icons: IconSet::new(icon_mode),
            borders: BorderSet::new(icon_mode),
            insights_scroll: PaneScroll::default(),
            servers_scroll: PaneScroll::default(),
            routes_scroll: PaneScroll::default(),
            executor: Box::new(LoggingExecutor::new()),
            regions: DashboardRegions::default(),
            pointer_in_timeline: false,
            pointer_in_topology: false,
        }
    }

    /// App over the mock timeline with caller-driven timers and ASCII icons.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let setup = DashboardSetup {
            icon_mode: IconMode::Ascii,
            ..DashboardSetup::new(DashboardConfig::default(), Timeline::mock())
        };
        Self::new(setup, infradash_core::ManualTimers::new())
    }

    /// Replace the action executor.
    #[must_use]
    pub fn with_executor(mut self, executor: impl ActionExecutor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    pub fn regions(&self) -> &DashboardRegions {
        &self.regions
    }

    pub fn insights_scroll(&self) -> u16 {
        self.insights_scroll.offset
    }

    pub fn servers_scroll(&self) -> u16 {
        self.servers_scroll.offset
    }

    pub fn routes_scroll(&self) -> u16 {
        self.routes_scroll.offset
    }

    /// Recompute regions for the terminal area. Call before every render so
    /// pointer hit-testing matches what is on screen.
    pub fn sync_layout(&mut self, area: Rect) {
        if !layout::fits(area) {
            // Nothing is drawn, so nothing can be hovered or auto-scroll
            self.regions = DashboardRegions::default();
            self.timeline.set_area(Rect::default());
            self.timeline.pointer_left();
            self.pointer_in_timeline = false;
            self.topology_hover.clear();
            self.pointer_in_topology = false;
            return;
        }

        let regions = dashboard_layout(area);
        self.regions = regions;
        self.timeline.set_area(Pane::inner(regions.timeline));

        let insights_inner = Pane::inner(regions.insights);
        let insight_lines = InsightsPanel::new(&self.insights, &self.theme, &self.icons, &self.borders)
            .lines(insights_inner.width)
            .len();
        self.insights_scroll
            .set_max(max_scroll(insight_lines, insights_inner.height));

        let servers_inner = Pane::inner(regions.servers);
        self.servers_scroll
            .set_max(max_scroll(self.servers.len() * 2, servers_inner.height));

        let routes_inner = Pane::inner(regions.routes);
        let route_lines = RouteTests::new(&self.routes, &self.theme, &self.icons, &self.borders)
            .lines()
            .len();
        self.routes_scroll
            .set_max(max_scroll(route_lines, routes_inner.height));
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.quit();
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::NextPane => self.focus = self.focus.next(),
            Action::PrevPane => self.focus = self.focus.prev(),
            Action::Pane(i) => {
                if let Some(pane) = FocusedPane::ALL.get(i) {
                    self.focus = *pane;
                }
            }
            Action::Copy => self.copy_focused(),
            Action::Back => {
                self.timeline.pointer_left();
                self.topology_hover.clear();
            }
            _ => match self.focus {
                FocusedPane::Timeline => self.handle_timeline_action(action),
                FocusedPane::Actions => self.handle_actions_action(action),
                FocusedPane::Topology => self.handle_topology_action(action),
                FocusedPane::Insights => scroll_action(&mut self.insights_scroll, action),
                FocusedPane::Servers => scroll_action(&mut self.servers_scroll, action),
                FocusedPane::Routes => scroll_action(&mut self.routes_scroll, action),
            },
        }
    }

    fn handle_timeline_action(&mut self, action: Action) {
        match action {
            Action::Left | Action::Up => self.timeline.hover_prev(),
            Action::Right | Action::Down => self.timeline.hover_next(),
            Action::Home => self.timeline.hover_first(),
            Action::End => self.timeline.hover_last(),
            _ => {}
        }
    }

    fn handle_actions_action(&mut self, action: Action) {
        let count = DashboardAction::ALL.len();
        match action {
            Action::Up => self.selected_action = self.selected_action.saturating_sub(1),
            Action::Down => self.selected_action = (self.selected_action + 1).min(count - 1),
            Action::Home => self.selected_action = 0,
            Action::End => self.selected_action = count - 1,
            Action::Select => {
                if let Some(action) = DashboardAction::ALL.get(self.selected_action) {
                    self.dispatch(*action);
                }
            }
            _ => {}
        }
    }

    fn handle_topology_action(&mut self, action: Action) {
        let count = self.topology.nodes.len();
        if count == 0 {
            return;
        }
        let current = self.topology_hover.hovered().copied();
        let next = match action {
            Action::Right | Action::Down => current.map_or(0, |i| (i + 1) % count),
            Action::Left | Action::Up => current.map_or(count - 1, |i| (i + count - 1) % count),
            _ => return,
        };
        self.topology_hover.enter(next);
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.pointer_moved(column, row),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => self.wheel(column, row, 1),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => self.wheel(column, row, -1),
            MouseEventKind::Down(MouseButton::Left) => self.click(column, row),
            _ => {}
        }
    }

    /// Pointer moved to a screen position.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let in_timeline = contains(self.timeline.area(), column, row);
        if in_timeline || self.pointer_in_timeline {
            // Outside the strip this is the leave
            self.timeline.pointer_moved(column, row);
        }
        self.pointer_in_timeline = in_timeline;

        let topology_inner = Pane::inner(self.regions.topology);
        let in_topology = contains(topology_inner, column, row);
        if in_topology {
            let node = node_at(&self.topology, &self.icons, topology_inner, column, row);
            self.topology_hover.retarget(node);
        } else if self.pointer_in_topology {
            self.topology_hover.clear();
        }
        self.pointer_in_topology = in_topology;
    }

    fn pane_at(&self, column: u16, row: u16) -> Option<FocusedPane> {
        let r = &self.regions;
        [
            (r.insights, FocusedPane::Insights),
            (r.actions, FocusedPane::Actions),
            (r.topology, FocusedPane::Topology),
            (r.servers, FocusedPane::Servers),
            (r.routes, FocusedPane::Routes),
            (r.timeline, FocusedPane::Timeline),
        ]
        .into_iter()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, pane)| pane)
    }

    fn wheel(&mut self, column: u16, row: u16, notches: i32) {
        match self.pane_at(column, row) {
            Some(FocusedPane::Timeline) => self.timeline.scroll_by(i64::from(notches) * SCROLL_SPEED),
            Some(FocusedPane::Insights) => self.insights_scroll.by(notches),
            Some(FocusedPane::Servers) => self.servers_scroll.by(notches),
            Some(FocusedPane::Routes) => self.routes_scroll.by(notches),
            _ => {}
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let Some(pane) = self.pane_at(column, row) else {
            return;
        };
        self.focus = pane;

        if pane == FocusedPane::Actions {
            if let Some(action) = action_at(Pane::inner(self.regions.actions), column, row) {
                self.selected_action = DashboardAction::ALL
                    .iter()
                    .position(|a| *a == action)
                    .unwrap_or(0);
                self.dispatch(action);
            }
        }
    }

    /// Deliver an auto-scroll timer tick to the timeline.
    pub fn on_timer_tick(&mut self, id: TimerId) -> bool {
        self.timeline.on_timer_tick(id)
    }

    /// Send an action to the executor.
    pub fn dispatch(&mut self, action: DashboardAction) {
        self.executor.execute(action);
        self.last_action = Some(action);
    }

    /// Status bar text for the last action.
    pub fn last_action_message(&self) -> Option<String> {
        self.last_action
            .map(|action| format!("Executing action: {}", action.id()))
    }

    /// Text the copy key would put on the clipboard.
    pub fn copy_text(&self) -> Option<String> {
        if let Some(marker) = self.timeline.hovered() {
            return Some(format!("{} - {}", marker.label, marker.occurred_at));
        }
        if self.focus == FocusedPane::Routes {
            let text = self
                .routes
                .iter()
                .map(|route| trace_lines(route).join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n");
            return Some(text);
        }
        None
    }

    fn copy_focused(&mut self) {
        let Some(text) = self.copy_text() else {
            self.notify("Nothing to copy");
            return;
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.notify("Copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.notify("Clipboard unavailable");
            }
        }
    }

    fn notify(&mut self, message: &str) {
        self.notification = Some(message.to_string());
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Called on each UI tick.
    pub fn tick(&mut self) {
        self.clock = chrono::Local::now().format("%H:%M:%S").to_string();

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Stop timers and mark the app for exit.
    pub fn quit(&mut self) {
        self.timeline.teardown();
        self.should_quit = true;
    }
}

fn scroll_action(scroll: &mut PaneScroll, action: Action) {
    match action {
        Action::Up => scroll.by(-1),
        Action::Down => scroll.by(1),
        Action::Home => scroll.offset = 0,
        Action::End => scroll.offset = scroll.max,
        _ => {}
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
