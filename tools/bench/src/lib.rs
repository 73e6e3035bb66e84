//! Runtime benchmark harness for the duplicate-counting algorithms.
//!
//! Generates a workload once, then times each algorithm against every entry
//! and writes one `<len>,<seconds>` line per entry to an artifact named after
//! the algorithm.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod records;
pub mod runner;
pub mod timing;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use records::{BenchmarkRecord, RecordWriter, read_records};
pub use runner::{AlgorithmReport, BenchmarkRunner, RunSummary};
pub use timing::{InputPolicy, Measurement, time_calls, time_entry};

pub use dupbench_core::{Algorithm, TimingPolicy, Workload, WorkloadShape};
