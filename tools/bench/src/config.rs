#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Configuration for benchmark runs

use crate::error::{BenchError, Result};
use crate::timing::InputPolicy;
use dupbench_core::workload::{DEFAULT_ENTRY_COUNT, DEFAULT_UNIT_LEN};
use dupbench_core::{Algorithm, TimingPolicy, WorkloadShape};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of timed calls for averaged algorithms
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Default directory receiving the `results_<label>.test` artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BenchConfig {
    /// Number of workload entries
    entry_count: usize,

    /// Length step between consecutive entries
    unit_len: usize,

    /// Timed calls per entry for averaged algorithms
    iterations: u32,

    /// Directory receiving one artifact per algorithm
    output_dir: PathBuf,

    /// Seed for the workload generator (entropy when absent)
    seed: Option<u64>,

    /// How sorting algorithms see their input across repeated calls
    input_policy: InputPolicy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            entry_count: DEFAULT_ENTRY_COUNT,
            unit_len: DEFAULT_UNIT_LEN,
            iterations: DEFAULT_ITERATIONS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            input_policy: InputPolicy::default(),
        }
    }
}

impl BenchConfig {
    /// Create a new benchmark configuration with validation
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `entry_count`, `unit_len` or `iterations` is zero
    /// - Output directory is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use dupbench::BenchConfig;
    /// # use std::path::PathBuf;
    /// let config = BenchConfig::new(20, 10_000, 100, PathBuf::from("data"));
    /// assert!(config.is_ok());
    /// ```
    pub fn new(
        entry_count: usize,
        unit_len: usize,
        iterations: u32,
        output_dir: PathBuf,
    ) -> Result<Self> {
        let config = Self {
            entry_count,
            unit_len,
            iterations,
            output_dir,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from TOML, filling unspecified fields with defaults
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is malformed or the result fails validation
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| BenchError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| BenchError::ConfigParse(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, entry_count: usize, unit_len: usize) -> Self {
        self.entry_count = entry_count;
        self.unit_len = unit_len;
        self
    }

    #[must_use]
    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    #[must_use]
    pub const fn shape(&self) -> WorkloadShape {
        WorkloadShape::new(self.entry_count, self.unit_len)
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub const fn input_policy(&self) -> InputPolicy {
        self.input_policy
    }

    /// Timing policy for `algorithm` under this configuration
    #[must_use]
    pub const fn timing_policy(&self, algorithm: Algorithm) -> TimingPolicy {
        algorithm.timing_policy(self.iterations)
    }

    /// Artifact path for `algorithm`, e.g. `data/results_A.test`
    #[must_use]
    pub fn output_path(&self, algorithm: Algorithm) -> PathBuf {
        self.output_dir
            .join(format!("results_{}.test", algorithm.label()))
    }

    /// Check every field against its allowed range
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.entry_count == 0 {
            Err(BenchError::InvalidConfig(
                "entry count must be greater than 0".to_string(),
            ))
        } else if self.unit_len == 0 {
            Err(BenchError::InvalidConfig(
                "unit length must be greater than 0".to_string(),
            ))
        } else if self.iterations == 0 {
            Err(BenchError::InvalidConfig(
                "iterations must be greater than 0".to_string(),
            ))
        } else if self.output_dir.as_os_str().is_empty() {
            Err(BenchError::InvalidConfig(
                "output directory cannot be empty".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
