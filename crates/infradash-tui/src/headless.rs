//! Headless mode for the infradash TUI.
//!
//! Runs the dashboard without a real terminal, enabling E2E testing and
//! one-shot rendering. Input is sent via channels and state is captured
//! after each render. Auto-scroll runs on real tokio timers.

use crate::app::{App, DashboardSetup, FocusedPane};
use crate::event::{Action, Event};
use crate::screens::{self, dashboard::DashboardScreen, Screen as _};
use crate::timer::TokioTimers;
use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use infradash_core::{AutoScrollState, MarkerId};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 120;
pub const DEFAULT_HEIGHT: u16 = 40;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
    pub focus: FocusedPane,
    /// Marker whose tooltip is showing.
    pub hovered_marker: Option<MarkerId>,
    pub autoscroll: AutoScrollState,
    /// Timeline scroll offset.
    pub scroll_left: u32,
}

impl HeadlessState {
    fn capture(app: &App, screen_contents: String) -> Self {
        Self {
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
            focus: app.focus,
            hovered_marker: app.timeline.hovered_id(),
            autoscroll: app.timeline.autoscroll_state(),
            scroll_left: app.timeline.scroll_left(),
        }
    }
}

/// Input accepted by a headless instance.
#[derive(Debug, Clone)]
enum HeadlessInput {
    Action(Action),
    Mouse(MouseEvent),
}

/// Handle to control a headless TUI instance.
///
/// Use this to send input and observe state changes.
pub struct HeadlessHandle {
    input_tx: mpsc::UnboundedSender<HeadlessInput>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.input_tx.send(HeadlessInput::Action(action)).is_ok()
    }

    /// Send a raw mouse event.
    pub fn send_mouse(&self, mouse: MouseEvent) -> bool {
        self.input_tx.send(HeadlessInput::Mouse(mouse)).is_ok()
    }

    /// Move the pointer to a cell.
    pub fn pointer_move(&self, column: u16, row: u16) -> bool {
        self.send_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(
        &mut self,
        condition: F,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            if tokio::time::timeout(remaining, self.state_rx.changed())
                .await
                .is_err()
            {
                return None;
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(
        &mut self,
        text: &str,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background task.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) = run_tui_headless(DashboardSetup::default(), HeadlessConfig::default());
///
/// handle.send_action(Action::Right);
/// let state = handle.wait_for_text("INCXXXXXX", Duration::from_secs(1)).await;
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    setup: DashboardSetup,
    config: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(setup, config, input_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle { input_tx, state_rx };

    (handle, task)
}

async fn run_headless_loop(
    setup: DashboardSetup,
    config: HeadlessConfig,
    mut input_rx: mpsc::UnboundedReceiver<HeadlessInput>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;

    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut app = App::new(setup, TokioTimers::new(timer_tx));

    let tick_duration = std::time::Duration::from_millis(config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.sync_layout(area);
            render_app(&app, area, frame.buffer_mut());
        })?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());
        let _ = state_tx.send(HeadlessState::capture(&app, screen_contents));

        if app.should_quit {
            break;
        }

        tokio::select! {
            Some(input) = input_rx.recv() => match input {
                HeadlessInput::Action(action) => app.handle_action(action),
                HeadlessInput::Mouse(mouse) => app.handle_mouse(mouse),
            },
            Some(event) = timer_rx.recv() => {
                if let Event::AutoScroll(id) = event {
                    app.on_timer_tick(id);
                }
            }
            () = tokio::time::sleep(tick_duration) => {}
        }
    }

    Ok(())
}

/// Render the dashboard and any overlay into a buffer.
pub(crate) fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    DashboardScreen.render(app, area, buf);
    if app.show_help {
        screens::render_help_overlay(area, buf, &app.theme);
    }
}

/// Render a single frame of `app` to text.
pub fn render_snapshot(app: &mut App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    app.sync_layout(area);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

/// Convert a terminal buffer to a string representation.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::IconMode;
    use infradash_core::{DashboardConfig, EventCategory, Marker, Timeline};
    use std::time::Duration;

    fn setup(markers: u64) -> DashboardSetup {
        let timeline = Timeline::new(
            (1..=markers)
                .map(|i| Marker::new(i, EventCategory::Change, format!("Change {i}"), format!("t+{i}")))
                .collect(),
        );
        DashboardSetup {
            config: DashboardConfig::default(),
            timeline,
            icon_mode: IconMode::Ascii,
        }
    }

    #[test]
    fn test_headless_state_default() {
        let state = HeadlessState::default();
        assert!(!state.should_quit);
        assert!(!state.show_help);
        assert_eq!(state.hovered_marker, None);
        assert_eq!(state.autoscroll, AutoScrollState::Idle);
        assert!(state.screen_contents.is_empty());
    }

    #[test]
    fn test_headless_config_default() {
        let config = HeadlessConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_render_snapshot_with_help() {
        let mut app = App::new_for_test();
        app.show_help = true;
        let out = render_snapshot(&mut app, 120, 40);
        assert!(out.contains("Help"));
        assert!(out.contains("Toggle this help"));
    }

    #[tokio::test]
    async fn test_headless_hover_and_quit() {
        let (mut handle, task) = run_tui_headless(setup(5), HeadlessConfig::default());
        handle
            .wait_for_text("Timeline", Duration::from_secs(2))
            .await
            .expect("first frame");

        handle.send_action(Action::Right);
        let state = handle
            .wait_for(|s| s.hovered_marker == Some(MarkerId(1)), Duration::from_secs(2))
            .await
            .expect("hover");
        assert!(state.screen_contents.contains("Change 1"));

        handle.send_action(Action::Quit);
        handle
            .wait_for(|s| s.should_quit, Duration::from_secs(2))
            .await
            .expect("quit");
        task.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_headless_autoscroll_reaches_end_and_stops() {
        // 60 markers: content 1198 wide, viewport 118, max scroll 1080
        let (mut handle, task) = run_tui_headless(setup(60), HeadlessConfig::default());
        handle
            .wait_for_text("Timeline", Duration::from_secs(2))
            .await
            .expect("first frame");

        for _ in 0..5 {
            handle.send_action(Action::End);
        }
        handle.send_action(Action::Back);
        handle
            .wait_for(|s| s.scroll_left == 1080 && s.hovered_marker.is_none(), Duration::from_secs(2))
            .await
            .expect("scrolled to end");

        // Wheel back a little, into the right proximity zone
        handle.send_mouse(MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 10,
            row: 33,
            modifiers: KeyModifiers::NONE,
        });
        handle.pointer_move(10, 33);
        handle
            .wait_for(|s| s.autoscroll == AutoScrollState::ScrollingRight, Duration::from_secs(2))
            .await
            .expect("auto-scroll started");

        let state = handle
            .wait_for(
                |s| s.autoscroll == AutoScrollState::Idle && s.scroll_left == 1080,
                Duration::from_secs(5),
            )
            .await
            .expect("auto-scroll finished");
        assert_eq!(state.scroll_left, 1080);

        handle.send_action(Action::Quit);
        task.await.unwrap().unwrap();
    }
}
