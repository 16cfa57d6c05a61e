//! Error types and exit codes for matpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed or inconsistent matrix input)

use thiserror::Error;

/// Exit codes reported by the matpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed matrix, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during matpath operations
#[derive(Error, Debug)]
pub enum MatpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown frontier policy: {0} (expected: local-greedy or dijkstra)")]
    UnknownPolicy(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("duplicate node in matrix: {name}")]
    DuplicateNode { name: String },

    #[error("column references unknown node: {column}")]
    UnknownNode { column: String },

    #[error("malformed weight for node {node}, column {column}: {value:?}")]
    MalformedWeight {
        node: String,
        column: String,
        value: String,
    },

    #[error("unknown start node: {name}")]
    UnknownStartNode { name: String },

    #[error("invalid matrix: {reason}")]
    MatrixShape { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MatpathError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MatpathError::UnknownFormat(_)
            | MatpathError::UnknownPolicy(_)
            | MatpathError::UsageError(_) => ExitCode::Usage,

            // Data errors
            MatpathError::DuplicateNode { .. }
            | MatpathError::UnknownNode { .. }
            | MatpathError::MalformedWeight { .. }
            | MatpathError::UnknownStartNode { .. }
            | MatpathError::MatrixShape { .. } => ExitCode::Data,

            // Generic failures
            MatpathError::Io(_)
            | MatpathError::Csv(_)
            | MatpathError::Json(_)
            | MatpathError::Other(_) => ExitCode::Failure,
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MatpathError::UnknownFormat(_) => "unknown_format",
            MatpathError::UnknownPolicy(_) => "unknown_policy",
            MatpathError::UsageError(_) => "usage_error",
            MatpathError::DuplicateNode { .. } => "duplicate_node",
            MatpathError::UnknownNode { .. } => "unknown_node",
            MatpathError::MalformedWeight { .. } => "malformed_weight",
            MatpathError::UnknownStartNode { .. } => "unknown_start_node",
            MatpathError::MatrixShape { .. } => "matrix_shape",
            MatpathError::Io(_) => "io_error",
            MatpathError::Csv(_) => "csv_error",
            MatpathError::Json(_) => "json_error",
            MatpathError::Other(_) => "other",
        }
    }
}

/// Result type alias for matpath operations
pub type Result<T> = std::result::Result<T, MatpathError>;
