//! Duplicate-counting strategies.
//!
//! Every strategy returns the number of elements that repeat a value seen
//! elsewhere in the slice, which always equals `len - distinct_values`. The
//! strategies differ only in how they get there, which is what the benchmark
//! measures.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Sorts `values` in place, then counts adjacent equal pairs.
///
/// O(n log n). This is the only strategy that mutates its input.
pub fn count_by_sorting(values: &mut [i32]) -> usize {
    values.sort_unstable();
    values
        .windows(2)
        .filter(|pair| matches!(pair, [left, right] if left == right))
        .count()
}

/// Keeps a growing list of seen values with a linear membership check per element.
///
/// O(n * distinct) which is quadratic on the generated workloads.
pub fn count_by_linear_list(values: &[i32]) -> usize {
    let mut seen: Vec<i32> = Vec::new();
    let mut duplicates = 0;
    for value in values {
        if seen.contains(value) {
            duplicates += 1;
        } else {
            seen.push(*value);
        }
    }
    duplicates
}

/// Counts insertions rejected by a balanced ordered set.
pub fn count_by_ordered_set(values: &[i32]) -> usize {
    let mut tree = BTreeSet::new();
    values.iter().filter(|value| !tree.insert(**value)).count()
}

/// Counts insertions rejected by a hash set.
pub fn count_by_hash_set(values: &[i32]) -> usize {
    let mut set = HashSet::with_capacity(values.len());
    values.iter().filter(|value| !set.insert(**value)).count()
}

/// Counts positions whose value appears again at some later position.
///
/// The inner scan stops at the first later match. O(n^2).
pub fn count_by_forward_scan(values: &[i32]) -> usize {
    let mut duplicates = 0;
    let mut rest = values;
    while let Some((first, tail)) = rest.split_first() {
        if tail.contains(first) {
            duplicates += 1;
        }
        rest = tail;
    }
    duplicates
}

/// How an algorithm's elapsed time is sampled for one workload entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingPolicy {
    /// Run `iterations` times against the same entry and report the mean.
    Averaged { iterations: u32 },
    /// Run once and report that measurement.
    SingleShot,
}

impl TimingPolicy {
    /// Number of timed calls this policy makes per entry.
    #[must_use]
    pub const fn iterations(self) -> u32 {
        match self {
            Self::Averaged { iterations } => iterations,
            Self::SingleShot => 1,
        }
    }
}

/// The five benchmarked duplicate-counting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Sort, then compare neighbours.
    A,
    /// Linear list membership.
    B,
    /// Ordered (B-tree) set.
    C,
    /// Hash set.
    D,
    /// Forward scan for a later equal value.
    E,
}

impl Algorithm {
    /// All algorithms in run order.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Single-letter identifier used in artifact names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::A => "sort then scan adjacent pairs",
            Self::B => "linear list membership",
            Self::C => "ordered set insertion",
            Self::D => "hash set insertion",
            Self::E => "forward scan for later match",
        }
    }

    /// Quadratic algorithms are stable enough to time once; the rest are averaged.
    #[must_use]
    pub const fn timing_policy(self, iterations: u32) -> TimingPolicy {
        match self {
            Self::A | Self::C | Self::D => TimingPolicy::Averaged { iterations },
            Self::B | Self::E => TimingPolicy::SingleShot,
        }
    }

    /// Whether [`Algorithm::count`] reorders its input.
    #[must_use]
    pub const fn sorts_in_place(self) -> bool {
        matches!(self, Self::A)
    }

    /// Count duplicates in `values` with this algorithm.
    ///
    /// Only [`Algorithm::A`] writes through the mutable borrow.
    pub fn count(self, values: &mut [i32]) -> usize {
        match self {
            Self::A => count_by_sorting(values),
            Self::B => count_by_linear_list(values),
            Self::C => count_by_ordered_set(values),
            Self::D => count_by_hash_set(values),
            Self::E => count_by_forward_scan(values),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_algorithm(s))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn count_all(values: &[i32]) -> Vec<usize> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| algorithm.count(&mut values.to_vec()))
            .collect()
    }

    #[test]
    fn test_scenario_two_repeated_values() {
        assert_eq!(count_all(&[4, 1, 2, 2, 3, 1]), vec![2; 5]);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(count_all(&[]), vec![0; 5]);
        assert_eq!(count_all(&[42]), vec![0; 5]);
    }

    #[test]
    fn test_constant_array() {
        assert_eq!(count_all(&[7; 50]), vec![49; 5]);
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(count_all(&[i32::MIN, i32::MAX]), vec![0; 5]);
        assert_eq!(count_all(&[i32::MIN, i32::MAX, i32::MIN]), vec![1; 5]);
    }

    #[test]
    fn test_sorting_mutates_input() {
        let mut values = vec![3, 1, 2, 1];
        assert_eq!(count_by_sorting(&mut values), 1);
        assert_eq!(values, vec![1, 1, 2, 3]);
    }

    #[test]
    fn test_non_sorting_algorithms_leave_input_alone() {
        for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.sorts_in_place()) {
            let mut values = vec![3, 1, 2, 1];
            algorithm.count(&mut values);
            assert_eq!(values, vec![3, 1, 2, 1], "algorithm {algorithm}");
        }
    }

    #[test]
    fn test_forward_scan_counts_each_position_once() {
        // 5 appears three times: the first two positions each find a later match.
        assert_eq!(count_by_forward_scan(&[5, 5, 5]), 2);
    }

    #[test]
    fn test_timing_policies() {
        assert_eq!(
            Algorithm::A.timing_policy(100),
            TimingPolicy::Averaged { iterations: 100 }
        );
        assert_eq!(Algorithm::B.timing_policy(100), TimingPolicy::SingleShot);
        assert_eq!(
            Algorithm::C.timing_policy(100),
            TimingPolicy::Averaged { iterations: 100 }
        );
        assert_eq!(
            Algorithm::D.timing_policy(100),
            TimingPolicy::Averaged { iterations: 100 }
        );
        assert_eq!(Algorithm::E.timing_policy(100), TimingPolicy::SingleShot);
        assert_eq!(TimingPolicy::SingleShot.iterations(), 1);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("a".parse::<Algorithm>().unwrap(), Algorithm::A);
        assert_eq!(" E ".parse::<Algorithm>().unwrap(), Algorithm::E);
        assert!(matches!(
            "F".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_display_matches_label() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string(), algorithm.label());
        }
    }
}
