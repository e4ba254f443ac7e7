//! Application state and update logic for the pullall TUI.

use crate::event::{key_to_action, Action, Event};
use crate::spinner::Spinner;
use crate::theme::Theme;
use crate::view;
use pullall_engine::{ModelId, Session, SessionEvent, Step};
use ratatui::text::Text;

/// Background work the event loop must start on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// List installed models.
    FetchModels,
    /// Pull a single model.
    Update(ModelId),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Session state machine.
    pub session: Session,
    /// Spinner animation.
    pub spinner: Spinner,
    /// Styles for rendering.
    pub theme: Theme,
    /// Whether the user asked to quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app waiting for its model list.
    pub fn new(theme: Theme) -> Self {
        Self {
            session: Session::new(),
            spinner: Spinner::default(),
            theme,
            should_quit: false,
        }
    }

    /// Job to run when the loop starts.
    pub fn init(&self) -> Job {
        Job::FetchModels
    }

    /// Whether the loop should stop.
    pub fn is_finished(&self) -> bool {
        self.should_quit || self.session.is_done()
    }

    /// Handle an event, returning the next job to start, if any.
    pub fn handle_event(&mut self, event: Event) -> Option<Job> {
        let session_event = match event {
            Event::Key(key) => {
                self.handle_action(key_to_action(key));
                return None;
            }
            Event::Tick => {
                self.spinner.tick();
                return None;
            }
            Event::Resize(_, _) => return None,
            Event::ModelsFetched(models) => SessionEvent::ModelsFetched(models),
            Event::ListFailed(error) => SessionEvent::ListFailed(error),
            Event::UpdateCompleted(outcome) => SessionEvent::UpdateCompleted(outcome),
        };

        match self.session.apply(session_event) {
            Step::Update(model) => Some(Job::Update(model)),
            Step::Finished | Step::Idle => None,
        }
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!(phase = ?self.session.phase(), "quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Text<'static> {
        view::render(&self.session, self.spinner.frame(), &self.theme)
    }

    /// Render the final summary wrapped to `width` columns.
    pub fn summary(&self, width: u16) -> Text<'static> {
        view::render_summary(&self.session, &self.theme, Some(width))
    }
}
