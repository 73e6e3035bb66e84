//! Error types for the benchmark harness

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or running a benchmark
#[derive(Debug, Error)]
pub enum BenchError {
    /// The artifact for one algorithm could not be opened, written, or flushed
    #[error("output destination unavailable '{path}': {reason}")]
    OutputUnavailable { path: PathBuf, reason: String },

    /// A line read back from an artifact is not `<len>,<seconds>`
    #[error("malformed benchmark record '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error(transparent)]
    Core(#[from] dupbench_core::Error),
}

impl BenchError {
    /// Create an output destination error
    pub fn output_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::OutputUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for benchmark harness operations
pub type Result<T> = std::result::Result<T, BenchError>;
