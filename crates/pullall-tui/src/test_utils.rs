//! Test utilities for pullall-tui rendering and state tests.
//!
//! This module provides helpers for building sessions at a given point of
//! a run and for converting rendered output to plain strings.

use crate::app::App;
use crate::theme::Theme;
use pullall_engine::{ModelId, Session, SessionEvent, UpdateOutcome};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget},
};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 12;

/// Create a test app with the default theme.
pub fn create_test_app() -> App {
    App::new(Theme::default())
}

/// Owned model identifiers from string slices.
pub fn models(names: &[&str]) -> Vec<ModelId> {
    names.iter().map(ToString::to_string).collect()
}

/// A session that has listed `names` and successfully updated the first
/// `index` of them.
pub fn session_at(names: &[&str], index: usize) -> Session {
    let mut session = Session::new();
    session.apply(SessionEvent::ModelsFetched(models(names)));
    for name in &names[..index] {
        session.apply(SessionEvent::UpdateCompleted(UpdateOutcome::Success(
            (*name).to_string(),
        )));
    }
    session
}

/// A finished session where exactly the models in `failed` failed.
pub fn finished_session(names: &[&str], failed: &[&str]) -> Session {
    let mut session = Session::new();
    session.apply(SessionEvent::ModelsFetched(models(names)));
    for name in names {
        let outcome = if failed.contains(name) {
            UpdateOutcome::Failure((*name).to_string())
        } else {
            UpdateOutcome::Success((*name).to_string())
        };
        session.apply(SessionEvent::UpdateCompleted(outcome));
    }
    session
}

/// Flatten rendered text to a string, one line per line, without styles.
pub fn text_to_string(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a buffer to a string representation.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    while result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the app's view into a buffer and return it as a string.
pub fn render_app_to_string(app: &App) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    Paragraph::new(app.view()).render(area, &mut buffer);
    buffer_to_string(&buffer)
}

/// Render the app's wrapped summary into a buffer and return it as a string.
pub fn render_summary_to_string(app: &App) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    Paragraph::new(app.summary(TEST_WIDTH)).render(area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_at_positions_index() {
        let session = session_at(&["a", "b", "c"], 2);
        assert_eq!(session.current_model(), Some("c"));
    }

    #[test]
    fn test_finished_session_records_failures() {
        let session = finished_session(&["a", "b"], &["b"]);
        assert!(session.is_done());
        assert_eq!(session.failed(), ["b"]);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld");
    }

    #[test]
    fn test_render_summary_to_buffer() {
        let mut app = create_test_app();
        app.session = finished_session(&["a", "b"], &["a"]);
        assert_eq!(
            render_app_to_string(&app),
            "  All model update attempts completed.\n\
             \n\
             \x20 The following models failed to update:\n\
             \x20 - a\n\
             \n\
             \x20 Please check these models manually."
        );
    }
}
