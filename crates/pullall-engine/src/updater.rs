//! Per-model update driver.
//!
//! Pulls one model and collapses the result into success or failure.
//! Failure reasons are logged but not carried in the outcome.

use crate::config::ToolConfig;
use crate::discovery::ModelId;
use crate::process::{run_tool, ProcessError, ProcessOutput};

/// Result of updating a single model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The pull completed.
    Success(ModelId),
    /// The pull could not run, exited non-zero, or reported a missing manifest.
    Failure(ModelId),
}

impl UpdateOutcome {
    /// Identifier of the model this outcome belongs to.
    pub fn model(&self) -> &str {
        match self {
            Self::Success(id) | Self::Failure(id) => id,
        }
    }

    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Classify a pull result.
///
/// Fails when the process could not run, exited non-zero, or its combined
/// output contains `marker`.
pub fn classify_pull(result: &Result<ProcessOutput, ProcessError>, marker: &str) -> bool {
    match result {
        Ok(output) => output.success && !output.combined().contains(marker),
        Err(_) => false,
    }
}

/// Pull `model` with the external tool.
pub async fn update_one(config: &ToolConfig, model: ModelId) -> UpdateOutcome {
    let result = run_tool(&config.program, &config.pull_argv(&model)).await;

    if classify_pull(&result, &config.not_found_marker) {
        tracing::info!(%model, "model updated");
        return UpdateOutcome::Success(model);
    }

    match &result {
        Ok(output) => tracing::warn!(
            %model,
            code = ?output.code,
            output = %output.combined().trim(),
            "model update failed"
        ),
        Err(e) => tracing::warn!(%model, error = %e, "model update failed"),
    }
    UpdateOutcome::Failure(model)
}
