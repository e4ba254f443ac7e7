//! Session state for a pullall run.
//!
//! The session owns the model list, the index of the model being updated
//! and the failures seen so far. It advances only in response to
//! [`SessionEvent`]s and tells the caller what to do next via [`Step`].
//! Updates are strictly sequential: the next pull is requested only after
//! the outcome for the current one has been applied.

use crate::discovery::ModelId;
use crate::updater::UpdateOutcome;

/// Asynchronous results delivered to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The installed model list arrived.
    ModelsFetched(Vec<ModelId>),
    /// Listing installed models failed.
    ListFailed(String),
    /// A single model update finished.
    UpdateCompleted(UpdateOutcome),
}

/// What the caller should do after applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Start updating this model.
    Update(ModelId),
    /// The session just became done.
    Finished,
    /// Nothing to schedule.
    Idle,
}

/// Coarse session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the model list.
    AwaitingList,
    /// Updating the model at this index.
    Processing(usize),
    /// Every model has been attempted.
    Done,
}

/// Mutable state of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    models: Vec<ModelId>,
    current: usize,
    failed: Vec<ModelId>,
    listed: bool,
    done: bool,
    list_error: Option<String>,
}

impl Session {
    /// Create a session waiting for its model list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.done {
            Phase::Done
        } else if self.listed {
            Phase::Processing(self.current)
        } else {
            Phase::AwaitingList
        }
    }

    /// Models in processing order.
    pub fn models(&self) -> &[ModelId] {
        &self.models
    }

    /// Index of the model being processed (equals the list length when done).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Model being processed, if any.
    pub fn current_model(&self) -> Option<&str> {
        match self.phase() {
            Phase::Processing(i) => self.models.get(i).map(String::as_str),
            Phase::AwaitingList | Phase::Done => None,
        }
    }

    /// Models whose update failed, in processing order.
    pub fn failed(&self) -> &[ModelId] {
        &self.failed
    }

    /// Whether every model has been attempted.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Error from listing installed models, if that failed.
    pub fn list_error(&self) -> Option<&str> {
        self.list_error.as_deref()
    }

    /// Apply an event and return the next step.
    pub fn apply(&mut self, event: SessionEvent) -> Step {
        match (self.phase(), event) {
            (Phase::AwaitingList, SessionEvent::ModelsFetched(models)) => {
                self.listed = true;
                self.models = models;
                self.current = 0;
                self.dispatch_current()
            }
            (Phase::AwaitingList, SessionEvent::ListFailed(error)) => {
                tracing::error!(%error, "could not list installed models");
                self.listed = true;
                self.list_error = Some(error);
                self.finish()
            }
            (Phase::Processing(i), SessionEvent::UpdateCompleted(outcome))
                if outcome.model() == self.models[i] =>
            {
                if let UpdateOutcome::Failure(model) = outcome {
                    self.failed.push(model);
                }
                self.current = i + 1;
                self.dispatch_current()
            }
            (phase, event) => {
                tracing::warn!(?phase, ?event, "ignoring unexpected session event");
                Step::Idle
            }
        }
    }

    fn dispatch_current(&mut self) -> Step {
        match self.models.get(self.current) {
            Some(model) => {
                tracing::debug!(
                    %model,
                    index = self.current,
                    total = self.models.len(),
                    "dispatching update"
                );
                Step::Update(model.clone())
            }
            None => self.finish(),
        }
    }

    fn finish(&mut self) -> Step {
        self.done = true;
        tracing::info!(
            total = self.models.len(),
            failed = self.failed.len(),
            "all model update attempts completed"
        );
        Step::Finished
    }
}
