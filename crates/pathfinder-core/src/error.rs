//! Error types and exit codes for pathfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed edge specs)
//! - 3: Data error (no path between the requested vertices, or none whose
//!   weight fits in a `u64`)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - target unreachable or path weight overflows (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathfinder operations
#[derive(Error, Debug)]
pub enum PathfinderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    /// The search exhausted its frontier without settling the target.
    #[error("no path found from {from} to {to}")]
    NotFound { from: String, to: String },

    /// The target is connected to the source, but only by paths weighing
    /// more than `u64::MAX`.
    #[error("path weight from {from} to {to} exceeds {max}", max = u64::MAX)]
    WeightOverflow { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathfinderError {
    /// Create an error for an unreachable target
    pub fn not_found(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        PathfinderError::NotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a target reachable only by overflowing paths
    pub fn weight_overflow(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        PathfinderError::WeightOverflow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathfinderError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfinderError::UnknownFormat(_)
            | PathfinderError::UsageError(_) => ExitCode::Usage,

            PathfinderError::NotFound { .. } | PathfinderError::WeightOverflow { .. } => {
                ExitCode::Data
            }

            PathfinderError::Io(_)
            | PathfinderError::Json(_)
            | PathfinderError::Toml(_)
            | PathfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfinderError::UnknownFormat(_) => "unknown_format",
            PathfinderError::UsageError(_) => "usage_error",
            PathfinderError::NotFound { .. } => "not_found",
            PathfinderError::WeightOverflow { .. } => "weight_overflow",
            PathfinderError::Io(_) => "io_error",
            PathfinderError::Json(_) => "json_error",
            PathfinderError::Toml(_) => "toml_error",
            PathfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for pathfinder operations
pub type Result<T> = std::result::Result<T, PathfinderError>;
