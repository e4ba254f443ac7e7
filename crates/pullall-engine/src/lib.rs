//! pullall-engine: Headless engine for re-pulling locally installed models
//!
//! This crate provides the core logic for pullall, including:
//! - Tool configuration for the external model runner
//! - Subprocess execution with captured output
//! - Installed model discovery
//! - Per-model update classification
//! - The sequential session state machine

pub mod config;
pub mod discovery;
pub mod process;
pub mod session;
#[cfg(test)]
pub mod test_utils;
pub mod updater;

// Re-export commonly used types
pub use config::{ToolConfig, NOT_FOUND_MARKER};
pub use discovery::{list_installed_models, parse_model_list, ListError, ModelId};
pub use process::{run_tool, ProcessError, ProcessOutput};
pub use session::{Phase, Session, SessionEvent, Step};
pub use updater::{classify_pull, update_one, UpdateOutcome};
