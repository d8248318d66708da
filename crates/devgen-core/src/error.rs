//! Domain errors for the generator pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a generator run
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The destination manifest is not valid JSON
    #[error("Failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The destination manifest parsed but cannot take a script merge
    #[error("{} {reason}", .path.display())]
    ManifestShape { path: PathBuf, reason: &'static str },

    /// template.yaml is malformed or inconsistent
    #[error("Invalid template set: {0}")]
    InvalidTemplateSet(String),

    /// A template named by template.yaml is not present in the source
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The package installer exited unsuccessfully
    #[error("Dependency installation failed ({}): {command}", exit_status(.code))]
    InstallFailed { command: String, code: Option<i32> },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
