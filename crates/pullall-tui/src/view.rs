//! Text rendering of the session.
//!
//! [`render`] is a pure function of the session, the spinner glyph and
//! the theme. The result is plain styled text; placing it on screen is the
//! event loop's job.

use crate::theme::Theme;
use pullall_engine::{Phase, Session};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use std::borrow::Cow;

pub const FETCHING: &str = "Fetching installed models...";
pub const COMPLETED: &str = "All model update attempts completed.";
pub const ALL_UPDATED: &str = "All models updated successfully!";
pub const FAILED_HEADER: &str = "The following models failed to update:";
pub const CHECK_MANUALLY: &str = "Please check these models manually.";
pub const LIST_FAILED: &str = "Could not list installed models:";

/// Render the current view.
///
/// Summary lines are not wrapped; use [`render_summary`] with a width to
/// fit them to the terminal.
pub fn render(session: &Session, spinner: &str, theme: &Theme) -> Text<'static> {
    match session.phase() {
        Phase::AwaitingList => Line::from(vec![
            Span::styled(spinner.to_string(), theme.spinner),
            Span::raw(format!(" {FETCHING}")),
        ])
        .into(),
        Phase::Processing(index) => {
            let model = session.models()[index].clone();
            Line::from(vec![
                Span::styled(spinner.to_string(), theme.spinner),
                Span::raw(" Updating "),
                Span::styled(model, theme.bold),
                Span::raw(format!("... ({}/{})", index + 1, session.models().len())),
            ])
            .into()
        }
        Phase::Done => render_summary(session, theme, None),
    }
}

/// Render the final summary, wrapped to `width` columns when given.
///
/// Every output line carries the theme margin. Embedded newlines always
/// start a new line.
pub fn render_summary(session: &Session, theme: &Theme, width: Option<u16>) -> Text<'static> {
    let margin = " ".repeat(usize::from(theme.margin));
    let available = width.map(|w| usize::from(w).saturating_sub(2 * margin.len()).max(1));
    let mut lines = Vec::new();
    let mut push = |text: &str, style: Style| {
        if text.is_empty() {
            lines.push(Line::default());
            return;
        }
        for segment in wrap(text, available) {
            lines.push(Line::from(vec![
                Span::raw(margin.clone()),
                Span::styled(segment, style),
            ]));
        }
    };

    push(COMPLETED, theme.info);
    push("", Style::default());

    if let Some(error) = session.list_error() {
        push(&format!("{LIST_FAILED} {error}"), theme.error);
    } else if session.failed().is_empty() {
        push(ALL_UPDATED, theme.success);
    } else {
        push(FAILED_HEADER, theme.error);
        for model in session.failed() {
            push(&format!("- {model}"), theme.error);
        }
        push("", Style::default());
        push(CHECK_MANUALLY, theme.info);
    }

    Text::from(lines)
}

fn wrap(text: &str, width: Option<usize>) -> Vec<String> {
    match width {
        Some(width) => textwrap::wrap(text, width)
            .into_iter()
            .map(Cow::into_owned)
            .collect(),
        None => text.lines().map(ToString::to_string).collect(),
    }
}
