#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Wall-clock timing of one algorithm against one workload entry

use dupbench_core::{Algorithm, TimingPolicy};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// How an in-place sorting algorithm sees its input across repeated calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputPolicy {
    /// Restore the unsorted entry before every timed call (outside the timed region)
    #[default]
    FreshCopy,

    /// Copy the entry once and let later calls see the already-sorted buffer
    ///
    /// Only the repeated-call effect is reproduced: the copy is private, so
    /// other algorithms still see the unsorted workload.
    ReuseSorted,
}

impl InputPolicy {
    /// Whether `algorithm`'s input must be restored between timed calls
    #[must_use]
    pub const fn refills(self, algorithm: Algorithm) -> bool {
        algorithm.sorts_in_place() && matches!(self, Self::FreshCopy)
    }
}

/// Result of timing one entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Mean elapsed time over all timed calls
    mean: Duration,

    /// Number of timed calls
    calls: u32,

    /// Duplicate count returned by the last call
    duplicates: usize,
}

impl Measurement {
    #[must_use]
    pub const fn mean(&self) -> Duration {
        self.mean
    }

    /// Mean elapsed time in fractional seconds
    #[must_use]
    pub fn mean_secs(&self) -> f64 {
        self.mean.as_secs_f64()
    }

    #[must_use]
    pub const fn calls(&self) -> u32 {
        self.calls
    }

    #[must_use]
    pub const fn duplicates(&self) -> usize {
        self.duplicates
    }
}

/// Time `algorithm` against `entry` according to `timing`
///
/// The algorithm always runs on a private copy, so `entry` is never
/// reordered. A zero-iteration averaged policy is treated as a single call.
#[must_use]
pub fn time_entry(
    algorithm: Algorithm,
    entry: &[i32],
    timing: TimingPolicy,
    input: InputPolicy,
) -> Measurement {
    time_calls(
        |values| algorithm.count(values),
        entry,
        timing.iterations(),
        input.refills(algorithm),
    )
}

/// Time `calls` invocations of `count` against a private copy of `entry`
///
/// Each timed region wraps exactly one call. With `refill`, the copy is
/// restored from `entry` before every call after the first, outside the
/// timed region.
#[must_use]
pub fn time_calls<F>(mut count: F, entry: &[i32], calls: u32, refill: bool) -> Measurement
where
    F: FnMut(&mut [i32]) -> usize,
{
    let calls = calls.max(1);
    let mut scratch = entry.to_vec();
    let mut total = Duration::ZERO;
    let mut duplicates = 0;

    for call in 0..calls {
        if refill && call > 0 {
            scratch.copy_from_slice(entry);
        }

        let start = Instant::now();
        duplicates = black_box(count(black_box(scratch.as_mut_slice())));
        total += start.elapsed();
    }

    Measurement {
        mean: total / calls,
        calls,
        duplicates,
    }
}
