//! infradash-tui: Terminal UI for the infradash monitoring dashboard
//!
//! This crate provides the TUI layer for infradash, including:
//! - The incident timeline strip with hover tooltips and edge auto-scroll
//! - Insights, topology, server, route and action panels
//! - Headless mode for testing and one-shot rendering

mod app;
mod event;
pub mod headless;
mod layout;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
mod timeline;
mod timer;
mod widgets;

pub use app::{App, DashboardSetup, FocusedPane};
pub use event::{Action, Event, EventHandler};
pub use headless::{render_snapshot, run_tui_headless, HeadlessConfig, HeadlessHandle, HeadlessState};
pub use timeline::TimelineStrip;
pub use timer::TokioTimers;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(setup: DashboardSetup) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(setup.config.tick_rate_ms);
    let timers = TokioTimers::new(events.sender());
    let mut app = App::new(setup, timers);
    app.tick();

    tracing::info!("dashboard started");
    let result = run_loop(&mut terminal, &mut app, &mut events).await;
    tracing::info!("dashboard stopped");

    // Timers stop before the terminal is restored
    app.quit();
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.sync_layout(area);
            headless::render_app(app, area, frame.buffer_mut());
        })?;

        if app.should_quit {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                // Ignore key releases on platforms that report them
                if key.kind == crossterm::event::KeyEventKind::Press {
                    app.handle_action(crate::event::key_to_action(key));
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Tick => app.tick(),
            Event::Resize(_, _) => {
                // Layout is recomputed on the next draw
            }
            Event::AutoScroll(id) => {
                app.on_timer_tick(id);
            }
        }
    }

    Ok(())
}

/// Get the TUI crate version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

#[cfg(test)]
mod snapshot_tests {
    use crate::test_utils::*;
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
    use infradash_core::MarkerId;

    fn moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_mouse_hover_shows_marker_tooltip() {
        let mut app = create_test_app();
        let idle = render_app_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
        assert!(idle.contains("1/12/2025 18:00h"));
        assert!(!idle.contains("INCXXXXXX"));

        // Icon row of the first cell
        app.handle_mouse(moved(10, 36));
        assert_eq!(app.timeline.hovered_id(), Some(MarkerId(1)));
        let hovered = render_app_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
        assert!(hovered.contains("INCXXXXXX"));

        app.handle_mouse(moved(60, 5));
        assert_eq!(app.timeline.hovered_id(), None);
        let left = render_app_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
        assert!(!left.contains("INCXXXXXX"));
    }
}
