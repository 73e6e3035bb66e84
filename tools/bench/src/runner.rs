#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Benchmark runner driving every algorithm over the shared workload

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::records::{BenchmarkRecord, RecordWriter};
use crate::timing::time_entry;
use dupbench_core::{Algorithm, Workload};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

/// Runs the benchmark for one or all algorithms
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner
    #[must_use]
    pub const fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run every algorithm, in order, against `workload`
    ///
    /// Runs are isolated: an unavailable output destination for one algorithm
    /// is logged and recorded as a failure, and the next algorithm still runs.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dupbench::{BenchConfig, BenchmarkRunner, Workload};
    /// let config = BenchConfig::default();
    /// let workload = Workload::from_seed(config.shape(), config.seed()).unwrap();
    ///
    /// let summary = BenchmarkRunner::new(config).run_all(&workload);
    /// assert!(summary.is_success());
    /// ```
    pub fn run_all(&self, workload: &Workload) -> RunSummary {
        let mut summary = RunSummary::default();

        for algorithm in Algorithm::ALL {
            match self.run_algorithm(workload, algorithm) {
                Ok(report) => summary.completed.push(report),
                Err(e) => {
                    error!(algorithm = %algorithm, error = %e, "benchmark run failed");
                    summary.failed.push((algorithm, e));
                }
            }
        }

        summary
    }

    /// Time `algorithm` over `workload` and write its artifact
    ///
    /// The artifact is `results_<label>.test` under the configured output
    /// directory. The file is closed on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::OutputUnavailable`] if the artifact cannot be
    /// created, written, or flushed
    pub fn run_algorithm(
        &self,
        workload: &Workload,
        algorithm: Algorithm,
    ) -> Result<AlgorithmReport> {
        let writer = RecordWriter::create(&self.config.output_path(algorithm))?;
        self.run_algorithm_to(writer, workload, algorithm)
    }

    /// Time `algorithm` over `workload`, writing records to any sink
    ///
    /// # Errors
    ///
    /// Returns error if the sink rejects a write or the final flush
    pub fn run_algorithm_to<W: Write>(
        &self,
        mut writer: RecordWriter<W>,
        workload: &Workload,
        algorithm: Algorithm,
    ) -> Result<AlgorithmReport> {
        let timing = self.config.timing_policy(algorithm);
        let input = self.config.input_policy();
        let started = Instant::now();

        info!(
            algorithm = %algorithm,
            method = algorithm.description(),
            calls_per_entry = timing.iterations(),
            entries = workload.len(),
            "starting benchmark"
        );

        for entry in workload.iter() {
            let measurement = time_entry(algorithm, entry, timing, input);
            let record = BenchmarkRecord::new(entry.len(), measurement.mean_secs());

            debug!(
                algorithm = %algorithm,
                len = record.len(),
                seconds = record.seconds(),
                duplicates = measurement.duplicates(),
                "entry timed"
            );

            writer.write_record(&record)?;
        }

        let records_written = writer.written();
        let path = writer.path().to_path_buf();
        writer.finish()?;

        let total_secs = started.elapsed().as_secs_f64();
        info!(
            algorithm = %algorithm,
            records = records_written,
            total_secs,
            "benchmark complete"
        );

        Ok(AlgorithmReport {
            algorithm,
            path,
            records_written,
            total_secs,
        })
    }
}

/// Outcome of one algorithm's run
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmReport {
    algorithm: Algorithm,
    path: PathBuf,
    records_written: usize,
    total_secs: f64,
}

impl AlgorithmReport {
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Where the records were written
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    #[must_use]
    pub const fn records_written(&self) -> usize {
        self.records_written
    }

    /// Wall-clock time of the whole run, including output
    #[must_use]
    pub const fn total_secs(&self) -> f64 {
        self.total_secs
    }
}

/// Outcome of a full run over all algorithms
#[derive(Debug, Default)]
pub struct RunSummary {
    completed: Vec<AlgorithmReport>,
    failed: Vec<(Algorithm, BenchError)>,
}

impl RunSummary {
    #[must_use]
    pub fn completed(&self) -> &[AlgorithmReport] {
        &self.completed
    }

    #[must_use]
    pub fn failed(&self) -> &[(Algorithm, BenchError)] {
        &self.failed
    }

    /// True when every algorithm wrote its artifact
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
