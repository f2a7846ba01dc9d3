use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotGetError {
    /// A resolver could not materialize an artifact for the tool.
    #[error("Failed to resolve '{tool}': {reason}")]
    ResolutionFailed { tool: String, reason: String },

    /// No resolver strategy matched the tool name / option set.
    #[error("No resolver available for '{tool}': {reason}")]
    NoResolver { tool: String, reason: String },

    /// Update lookup found no metadata record for the tool.
    #[error("No tool with name '{0}' is installed")]
    ToolNotInstalled(String),

    /// A metadata record did not decode as `key=:=value` lines.
    #[error("Malformed metadata record at '{path}': {message}")]
    MalformedRecord { path: PathBuf, message: String },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Invalid option '{0}': expected key=value")]
    InvalidOption(String),

    /// Path resolution or validation error
    #[error("Path error: {0}")]
    PathError(String),

    /// Lock acquisition failed on the installation root
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DotGetError>;
