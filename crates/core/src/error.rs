//! Core error types for duplicate counting and workload generation.
//!
//! The counting algorithms themselves are total; only the edges that accept
//! caller-supplied labels or sizes can fail.

use thiserror::Error;

/// Core error type for dupbench operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown algorithm '{label}': expected one of A, B, C, D, E")]
    UnknownAlgorithm { label: String },

    #[error("workload too large: {entry_count} entries of {unit_len} values ({reason})")]
    WorkloadTooLarge {
        entry_count: usize,
        unit_len: usize,
        reason: String,
    },
}

impl Error {
    /// Create an unknown algorithm error.
    pub fn unknown_algorithm(label: impl Into<String>) -> Self {
        Self::UnknownAlgorithm {
            label: label.into(),
        }
    }

    /// Create a workload sizing error.
    pub fn workload_too_large(
        entry_count: usize,
        unit_len: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::WorkloadTooLarge {
            entry_count,
            unit_len,
            reason: reason.into(),
        }
    }
}

/// The standard Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_message() {
        let err = Error::unknown_algorithm("Z");
        assert_eq!(
            err.to_string(),
            "unknown algorithm 'Z': expected one of A, B, C, D, E"
        );
    }

    #[test]
    fn test_workload_too_large_message() {
        let err = Error::workload_too_large(3, 7, "overflow");
        assert!(err.to_string().contains("3 entries of 7 values"));
    }
}
