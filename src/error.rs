//! Error types for Wheelwright
//!
//! Library code returns `WheelwrightError`; the binary wraps it in `anyhow`
//! and downcasts at the edge to pick an exit code.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Wheelwright operations
pub type WheelwrightResult<T> = Result<T, WheelwrightError>;

/// Exit code used when an external program cannot be spawned (shell convention).
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Main error type for Wheelwright operations
#[derive(Error, Debug)]
pub enum WheelwrightError {
    /// Required `name = ...` or `version = ...` line is absent
    #[error("missing required field '{field}' in {}", describe_source(.file))]
    MissingField {
        field: &'static str,
        file: Option<PathBuf>,
    },

    /// Reading or removing a path failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tool configuration (wheelwright.toml) could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// External program could not be started
    #[error("external tool '{program}' not found")]
    ToolNotFound { program: String },

    /// External program ran and reported failure
    #[error("`{command}` failed{}", describe_code(.code))]
    ToolFailed { command: String, code: Option<i32> },
}

impl WheelwrightError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code the CLI should terminate with for this error.
    ///
    /// External tool failures propagate the tool's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolFailed { code, .. } => code.unwrap_or(1),
            Self::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            _ => 1,
        }
    }

    /// File the error points at, if any.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::MissingField { file, .. } => file.as_deref(),
            Self::Io { path, .. } => Some(path),
            Self::InvalidConfig { file, .. } => Some(file),
            Self::ToolNotFound { .. } | Self::ToolFailed { .. } => None,
        }
    }
}

fn describe_source(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => path.display().to_string(),
        None => "configuration text".to_string(),
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}
