//! Test utilities for infradash-tui rendering tests.

use crate::app::App;
use ratatui::{backend::TestBackend, Terminal};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 120;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 40;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with default mock data.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Lay out and render the whole dashboard, returning its text.
pub fn render_app_to_string(app: &mut App, width: u16, height: u16) -> String {
    crate::headless::render_snapshot(app, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, style::Style};

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_terminal_draw_matches_snapshot_render() {
        let mut app = create_test_app();
        let expected = render_app_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

        let mut terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.sync_layout(area);
                crate::headless::render_app(&app, area, frame.buffer_mut());
            })
            .unwrap();
        assert_eq!(buffer_to_string(terminal.backend().buffer()), expected);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", Style::default());
        buffer.set_string(0, 1, "World", Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }
}
