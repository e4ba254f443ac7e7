//! Configuration types for pullall engine.
//!
//! This module describes how the external model tool is invoked. The
//! defaults target `ollama`; nothing here is read from disk or the
//! environment.

use std::ffi::OsString;

/// Default program name of the external model tool.
pub const DEFAULT_PROGRAM: &str = "ollama";

/// Verb that lists installed models.
pub const DEFAULT_LIST_VERB: &str = "ls";

/// Verb that (re)downloads a single model.
pub const DEFAULT_PULL_VERB: &str = "pull";

/// Output text the tool prints when the remote manifest does not exist.
pub const NOT_FOUND_MARKER: &str = "Error: pull model manifest: file does not exist";

/// Invocation settings for the external model tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Program to execute (looked up on PATH).
    pub program: OsString,

    /// Arguments placed before the verb on every invocation.
    pub leading_args: Vec<OsString>,

    /// Verb for listing installed models.
    pub list_verb: String,

    /// Verb for pulling a model by identifier.
    pub pull_verb: String,

    /// Substring in pull output that marks a failed update.
    pub not_found_marker: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            leading_args: Vec::new(),
            list_verb: DEFAULT_LIST_VERB.into(),
            pull_verb: DEFAULT_PULL_VERB.into(),
            not_found_marker: NOT_FOUND_MARKER.into(),
        }
    }
}

impl ToolConfig {
    /// Create a config for a different program with default verbs.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Add arguments placed before the verb.
    #[must_use]
    pub fn leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Full argument list for the list invocation.
    pub fn list_argv(&self) -> Vec<OsString> {
        let mut argv = self.leading_args.clone();
        argv.push(self.list_verb.clone().into());
        argv
    }

    /// Full argument list for pulling `model`.
    pub fn pull_argv(&self, model: &str) -> Vec<OsString> {
        let mut argv = self.leading_args.clone();
        argv.push(self.pull_verb.clone().into());
        argv.push(model.into());
        argv
    }
}
