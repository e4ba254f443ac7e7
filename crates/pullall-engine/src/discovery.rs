//! Installed model discovery for pullall engine.
//!
//! This module runs the tool's list verb and turns its tabular output
//! into an ordered list of model identifiers.

use crate::config::ToolConfig;
use crate::process::{run_tool, ProcessError};
use thiserror::Error;

/// Opaque name of an installed model, e.g. `llama3:8b`.
pub type ModelId = String;

/// Error type for listing installed models.
#[derive(Debug, Error)]
pub enum ListError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("list command exited with code {}: {stderr}", exit_code_label(.code))]
    Exit { code: Option<i32>, stderr: String },
}

fn exit_code_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "?".to_string(), |c| c.to_string())
}

/// List installed models in the order the tool reports them.
pub async fn list_installed_models(config: &ToolConfig) -> Result<Vec<ModelId>, ListError> {
    let output = run_tool(&config.program, &config.list_argv()).await?;

    if !output.success {
        return Err(ListError::Exit {
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }

    let models = parse_model_list(&output.stdout);
    tracing::info!(count = models.len(), "listed installed models");
    Ok(models)
}

/// Parse list output: drop the header line, keep the first field of every
/// non-blank row.
///
/// The first line is discarded whatever it contains. No validation is done
/// on the identifiers themselves.
pub fn parse_model_list(output: &str) -> Vec<ModelId> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fake_tool, LS_OUTPUT};

    #[test]
    fn test_parse_keeps_row_order() {
        assert_eq!(
            parse_model_list(LS_OUTPUT),
            vec!["llama3:8b", "mistral:latest", "nomic-embed-text:latest"]
        );
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        assert!(parse_model_list("NAME    ID    SIZE    MODIFIED\n").is_empty());
        assert!(parse_model_list("").is_empty());
    }

    #[test]
    fn test_parse_skips_blank_rows() {
        let output = "NAME\n\n   \na 1\n\t\nb 2\n";
        assert_eq!(parse_model_list(output), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_discards_first_line_unconditionally() {
        // Even if the first line looks like a model row, it is the header.
        assert_eq!(parse_model_list("llama3:8b abc\nmistral xyz"), vec!["mistral"]);
    }

    #[test]
    fn test_parse_accepts_any_first_token() {
        let output = "NAME\n--weird-- trailing\n42\n";
        assert_eq!(parse_model_list(output), vec!["--weird--", "42"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let output = "NAME ID\r\nphi3:mini 123\r\n";
        assert_eq!(parse_model_list(output), vec!["phi3:mini"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_against_fake_tool() {
        let script = format!("[ \"$1\" = ls ] || exit 9\ncat <<'OUT'\n{LS_OUTPUT}OUT\necho 'warning: noise' >&2\n");
        let (_dir, config) = fake_tool(&script);
        let models = list_installed_models(&config).await.unwrap();
        assert_eq!(
            models,
            vec!["llama3:8b", "mistral:latest", "nomic-embed-text:latest"]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_failure_reports_exit() {
        let (_dir, config) = fake_tool("echo 'could not connect to ollama app' >&2\nexit 1\n");
        let err = list_installed_models(&config).await.unwrap_err();
        match &err {
            ListError::Exit { code, stderr } => {
                assert_eq!(*code, Some(1));
                assert_eq!(stderr, "could not connect to ollama app");
            }
            ListError::Process(e) => panic!("unexpected process error: {e}"),
        }
        assert!(err.to_string().contains("exited with code 1"));
    }

    #[tokio::test]
    async fn test_list_missing_tool() {
        let config = ToolConfig::with_program("pullall-definitely-missing-binary");
        let err = list_installed_models(&config).await.unwrap_err();
        assert!(matches!(err, ListError::Process(ProcessError::NotFound(_))));
    }
}
