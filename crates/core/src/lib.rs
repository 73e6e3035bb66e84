//! Core types for the duplicate-counting runtime benchmark.
//!
//! - [`algorithms`]: the five duplicate-counting strategies and the [`Algorithm`] selector
//! - [`workload`]: generation of the shared, read-only input arrays
//! - [`error`]: typed errors for the fallible edges

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod algorithms;
pub mod error;
pub mod workload;

pub use algorithms::{Algorithm, TimingPolicy};
pub use error::{Error, Result};
pub use workload::{Workload, WorkloadShape};
