//! Workload generation.
//!
//! A workload is a fixed sequence of integer arrays of lengths
//! `unit_len, 2 * unit_len, ..., entry_count * unit_len`. An array of length
//! `L` holds values drawn uniformly from `0..=L/2`, so duplicates are all but
//! guaranteed. Entries are generated once and only ever handed out as shared
//! slices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Default number of entries in a workload.
pub const DEFAULT_ENTRY_COUNT: usize = 20;

/// Default length step between consecutive entries.
pub const DEFAULT_UNIT_LEN: usize = 10_000;

/// Number of entries and length step of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadShape {
    entry_count: usize,
    unit_len: usize,
}

impl WorkloadShape {
    #[must_use]
    pub const fn new(entry_count: usize, unit_len: usize) -> Self {
        Self {
            entry_count,
            unit_len,
        }
    }

    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entry_count
    }

    #[must_use]
    pub const fn unit_len(&self) -> usize {
        self.unit_len
    }

    /// Entry lengths in generation order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkloadTooLarge`] if the largest length overflows
    /// `usize` or its value bound does not fit in `i32`.
    pub fn lengths(&self) -> Result<Vec<usize>> {
        Ok(self.bounds()?.into_iter().map(|(len, _)| len).collect())
    }

    /// Each entry length paired with its inclusive value bound `len / 2`.
    fn bounds(&self) -> Result<Vec<(usize, i32)>> {
        self.unit_len
            .checked_mul(self.entry_count)
            .ok_or_else(|| self.too_large("largest length overflows usize"))?;

        (1..=self.entry_count)
            .map(|step| {
                let len = step * self.unit_len;
                i32::try_from(len / 2)
                    .map(|bound| (len, bound))
                    .map_err(|_| self.too_large("value bound exceeds i32::MAX"))
            })
            .collect()
    }

    fn too_large(&self, reason: &str) -> Error {
        Error::workload_too_large(self.entry_count, self.unit_len, reason)
    }
}

impl Default for WorkloadShape {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_COUNT, DEFAULT_UNIT_LEN)
    }
}

/// The read-only set of arrays shared by every algorithm run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    entries: Vec<Vec<i32>>,
}

impl Workload {
    /// Generate a workload of the given shape from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkloadTooLarge`] if the shape cannot be represented.
    pub fn generate<R: Rng>(shape: WorkloadShape, rng: &mut R) -> Result<Self> {
        let entries = shape
            .bounds()?
            .into_iter()
            .map(|(len, bound)| random_entry(len, bound, rng))
            .collect();

        Ok(Self { entries })
    }

    /// Generate a workload, seeded for reproducibility when `seed` is given.
    ///
    /// Without a seed the generator is initialised from OS entropy and runs
    /// differ from one another.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkloadTooLarge`] if the shape cannot be represented.
    pub fn from_seed(shape: WorkloadShape, seed: Option<u64>) -> Result<Self> {
        let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::generate(shape, &mut rng)
    }

    /// Wrap hand-built entries.
    #[must_use]
    pub const fn from_entries(entries: Vec<Vec<i32>>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[i32]> {
        self.entries.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn random_entry<R: Rng>(len: usize, bound: i32, rng: &mut R) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..=bound)).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_lengths() {
        let lengths = WorkloadShape::default().lengths().unwrap();
        assert_eq!(lengths.len(), 20);
        assert_eq!(lengths.first(), Some(&10_000));
        assert_eq!(lengths.last(), Some(&200_000));
        assert!(lengths.windows(2).all(|w| matches!(w, [a, b] if b - a == 10_000)));
    }

    #[test]
    fn test_values_within_half_length() {
        let workload = Workload::from_seed(WorkloadShape::new(4, 100), Some(7)).unwrap();
        for entry in workload.iter() {
            let bound = i32::try_from(entry.len() / 2).unwrap();
            assert!(entry.iter().all(|v| (0..=bound).contains(v)));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let shape = WorkloadShape::new(3, 50);
        let first = Workload::from_seed(shape, Some(42)).unwrap();
        let second = Workload::from_seed(shape, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_lengths_are_deterministic() {
        let shape = WorkloadShape::new(5, 10);
        let first = Workload::from_seed(shape, None).unwrap();
        let second = Workload::from_seed(shape, None).unwrap();
        let lengths = |w: &Workload| w.iter().map(<[i32]>::len).collect::<Vec<_>>();
        assert_eq!(lengths(&first), lengths(&second));
        assert_eq!(lengths(&first), vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_generated_entries_contain_duplicates() {
        let workload = Workload::from_seed(WorkloadShape::new(2, 1_000), Some(1)).unwrap();
        for entry in workload.iter() {
            assert!(crate::algorithms::count_by_hash_set(entry) > 0);
        }
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let result = WorkloadShape::new(usize::MAX, 2).lengths();
        assert!(matches!(result, Err(Error::WorkloadTooLarge { .. })));
    }

    #[test]
    fn test_value_bound_beyond_i32_rejected() {
        let too_big = usize::try_from(i32::MAX).unwrap() * 4;
        let result = WorkloadShape::new(1, too_big).lengths();
        assert!(matches!(result, Err(Error::WorkloadTooLarge { .. })));
    }

    #[test]
    fn test_oversized_generation_reports_requested_shape() {
        let unit_len = usize::try_from(i32::MAX).unwrap() * 2;
        let mut rng = StdRng::seed_from_u64(0);
        let result = Workload::generate(WorkloadShape::new(3, unit_len), &mut rng);
        assert!(
            matches!(
                result,
                Err(Error::WorkloadTooLarge { entry_count: 3, unit_len: reported, .. })
                    if reported == unit_len
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_empty_shape() {
        let workload = Workload::from_seed(WorkloadShape::new(0, 10), None).unwrap();
        assert!(workload.is_empty());
    }
}
