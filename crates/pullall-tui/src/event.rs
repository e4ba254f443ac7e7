//! Event handling for the pullall TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pullall_engine::{ModelId, UpdateOutcome};
use std::time::Duration;
use tokio::sync::mpsc;

/// Everything the event loop reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The spinner should advance.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
    /// The installed model list arrived.
    ModelsFetched(Vec<ModelId>),
    /// Listing installed models failed.
    ListFailed(String),
    /// A single model update finished.
    UpdateCompleted(UpdateOutcome),
}

/// Event channel fed by a terminal input thread and by background jobs.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let handler = Self::without_input();
        let tx_clone = handler.sender();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        handler
    }

    /// Create a handler fed only through [`EventHandler::sender`].
    pub fn without_input() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    /// Sender for posting job results back to the loop.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
