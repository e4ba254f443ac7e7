//! pullall-tui: Terminal UI for re-pulling locally installed models
//!
//! This crate provides the interactive layer for pullall, including:
//! - The event loop tying terminal input, spinner ticks and background jobs
//! - Rendering of progress and the final summary
//! - Theme and spinner widgets

mod app;
mod event;
mod spinner;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod view;

pub use app::{App, Job};
pub use event::{Action, Event, EventHandler};
pub use pullall_engine;
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use pullall_engine::{list_installed_models, update_one, ToolConfig};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::{Paragraph, Widget},
    Terminal, TerminalOptions, Viewport,
};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Height of the inline progress area.
const VIEWPORT_HEIGHT: u16 = 1;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), ShowCursor);
    }
}

/// Run the TUI application.
///
/// Lists installed models, pulls each one in turn and leaves the summary
/// in the terminal scrollback. Returns early if the user quits; any child
/// process still running at that point is left to finish on its own.
pub async fn run_tui(tool: ToolConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(VIEWPORT_HEIGHT),
        },
    )?;

    let mut app = App::new(Theme::default());
    let mut events = EventHandler::new(spinner::TICK_RATE_MS);
    let tool = Arc::new(tool);

    spawn_job(app.init(), &tool, events.sender());

    run_loop(&mut terminal, &mut app, &mut events, &tool).await?;
    finish(&mut terminal, &app)?;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    Ok(())
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventHandler,
    tool: &Arc<ToolConfig>,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.is_finished() {
        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Paragraph::new(app.view()), area);
        })?;

        let Some(event) = events.next().await else {
            break;
        };

        if let Some(job) = app.handle_event(event) {
            spawn_job(job, tool, events.sender());
        }
    }

    Ok(())
}

/// Clear the progress line and, if every model was attempted, leave the
/// summary above it in the scrollback.
fn finish<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> io::Result<()> {
    terminal.clear()?;
    if app.session.is_done() && !app.should_quit {
        let summary = app.summary(terminal.size()?.width);
        let height = u16::try_from(summary.height()).unwrap_or(u16::MAX);
        terminal.insert_before(height, |buf| Paragraph::new(summary).render(buf.area, buf))?;
    }
    Ok(())
}

/// Start `job` in the background; it posts exactly one event when done.
fn spawn_job(job: Job, tool: &Arc<ToolConfig>, tx: mpsc::UnboundedSender<Event>) {
    let tool = Arc::clone(tool);
    tokio::spawn(async move {
        let event = match job {
            Job::FetchModels => match list_installed_models(&tool).await {
                Ok(models) => Event::ModelsFetched(models),
                Err(e) => Event::ListFailed(e.to_string()),
            },
            Job::Update(model) => Event::UpdateCompleted(update_one(&tool, model).await),
        };
        // The receiver is gone once the loop has exited
        let _ = tx.send(event);
    });
}
