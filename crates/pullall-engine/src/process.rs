//! Process execution for the external model tool.
//!
//! Each call runs one subprocess to completion and collects its output.
//! There is no timeout: a hung tool stalls only the task awaiting it.

use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Error type for process execution.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0} not found on PATH")]
    NotFound(String),

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output collected from a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,

    /// Exit code, if the process was not killed by a signal.
    pub code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len() + 1);
        combined.push_str(&self.stdout);
        if !self.stdout.is_empty() && !self.stdout.ends_with('\n') && !self.stderr.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }
}

/// Run `program` with `args` and wait for it to exit.
///
/// A non-zero exit is not an error here; callers inspect
/// [`ProcessOutput::success`]. Only failures to start or talk to the
/// process are returned as [`ProcessError`].
pub async fn run_tool(program: &OsStr, args: &[OsString]) -> Result<ProcessOutput, ProcessError> {
    let display = program.to_string_lossy().into_owned();
    let path = which::which(program).map_err(|_| ProcessError::NotFound(display.clone()))?;

    tracing::debug!(program = %path.display(), ?args, "running external tool");

    let child = Command::new(&path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: display,
            source,
        })?;

    let output = child.wait_with_output().await?;

    Ok(ProcessOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
