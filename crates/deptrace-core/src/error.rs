//! Error types and exit codes for deptrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing input file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per deptrace convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or unreadable input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during deptrace operations
#[derive(Error, Debug)]
pub enum DeptraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl DeptraceError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        DeptraceError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            DeptraceError::UnknownFormat(_) | DeptraceError::UsageError(_) => ExitCode::Usage,

            // Data errors
            DeptraceError::InputNotFound { .. } => ExitCode::Data,

            // Generic failures
            DeptraceError::Io(_)
            | DeptraceError::Json(_)
            | DeptraceError::FailedOperationWithTarget { .. }
            | DeptraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            DeptraceError::UnknownFormat(_) => "unknown_format",
            DeptraceError::UsageError(_) => "usage_error",
            DeptraceError::InputNotFound { .. } => "input_not_found",
            DeptraceError::Io(_) => "io_error",
            DeptraceError::Json(_) => "json_error",
            DeptraceError::FailedOperationWithTarget { .. } => "failed_operation",
            DeptraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for deptrace operations
pub type Result<T> = std::result::Result<T, DeptraceError>;
