//! Test utilities for exercising the engine against a scripted tool.

use crate::config::ToolConfig;
use tempfile::TempDir;

/// Output of `ollama ls` as printed by the tool today.
pub const LS_OUTPUT: &str = "\
NAME                       ID              SIZE      MODIFIED
llama3:8b                  365c0bd3c000    4.7 GB    2 days ago
mistral:latest             f974a74358d6    4.1 GB    3 weeks ago
nomic-embed-text:latest    0a109f422b47    274 MB    2 months ago
";

/// Write `body` as a shell script and build a config that runs it via `sh`.
///
/// The script receives the verb as `$1` and the model (for pulls) as `$2`.
/// Returns the temp dir so it outlives the test.
pub fn fake_tool(body: &str) -> (TempDir, ToolConfig) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let script = dir.path().join("fake-tool.sh");
    std::fs::write(&script, body).expect("Failed to write fake tool");
    let config = ToolConfig::with_program("sh").leading_args([script.into_os_string()]);
    (dir, config)
}
