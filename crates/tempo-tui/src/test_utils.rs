//! Test utilities for tempo-tui rendering and integration testing.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tempo_core::Config;

use crate::app::App;
use crate::shell;
use crate::theme::Theme;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Configuration used by rendering tests.
///
/// Keeps the journal out of the working directory; the journal is only
/// written by delivery tasks, which rendering tests never spawn.
pub fn test_config() -> Config {
    Config {
        calendar_url: "https://calendar.example/embed".into(),
        journal_path: std::env::temp_dir()
            .join("tempo-tui-tests")
            .join("journal.jsonl"),
        ..Default::default()
    }
}

/// Create a test app with the test configuration.
pub fn create_test_app() -> App {
    App::new(test_config())
}

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string representation for content assertions.
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

/// Render the shell for an app and return the buffer as a string.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    let theme = Theme::default();
    terminal
        .draw(|frame| shell::render_shell(frame, app, &theme))
        .expect("Failed to draw");
    buffer_to_string(terminal.backend().buffer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(!app.should_quit);
        assert!(app.controller.transcript().is_empty());
    }

    #[test]
    fn test_buffer_to_string() {
        let area = ratatui::layout::Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }
}
