#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Benchmark records and the plain-text artifact they are written to
//!
//! One line per record, `<len>,<seconds>`, newline-terminated, no header.

use crate::error::{BenchError, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One measurement: entry length and elapsed seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRecord {
    len: usize,
    seconds: f64,
}

impl BenchmarkRecord {
    #[must_use]
    pub const fn new(len: usize, seconds: f64) -> Self {
        Self { len, seconds }
    }

    /// Length of the workload entry
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Elapsed time in fractional seconds
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.len, self.seconds)
    }
}

impl FromStr for BenchmarkRecord {
    type Err = BenchError;

    fn from_str(line: &str) -> Result<Self> {
        let (len, seconds) = line
            .trim_end()
            .split_once(',')
            .ok_or_else(|| BenchError::malformed_record(line, "missing ','"))?;

        let len = len
            .parse::<usize>()
            .map_err(|e| BenchError::malformed_record(line, format!("length: {e}")))?;

        let seconds = seconds
            .parse::<f64>()
            .map_err(|e| BenchError::malformed_record(line, format!("seconds: {e}")))?;

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(BenchError::malformed_record(
                line,
                "seconds must be finite and non-negative",
            ));
        }

        Ok(Self::new(len, seconds))
    }
}

/// Writes records to one artifact
///
/// Every I/O failure is reported as [`BenchError::OutputUnavailable`] carrying
/// the artifact path. Dropping the writer releases the underlying handle.
pub struct RecordWriter<W: Write> {
    inner: W,
    path: PathBuf,
    written: usize,
}

impl RecordWriter<BufWriter<File>> {
    /// Create (or truncate) the artifact at `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be created
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| BenchError::output_unavailable(path, e))?;
        }

        let file = File::create(path).map_err(|e| BenchError::output_unavailable(path, e))?;

        Ok(Self::with_path(BufWriter::new(file), path))
    }
}

impl<W: Write> RecordWriter<W> {
    /// Wrap an arbitrary sink; `label` is used in error messages
    pub fn new(inner: W, label: impl Into<PathBuf>) -> Self {
        Self::with_path(inner, label)
    }

    fn with_path(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            written: 0,
        }
    }

    /// Append one record line
    ///
    /// # Errors
    ///
    /// Returns error if the sink rejects the write
    pub fn write_record(&mut self, record: &BenchmarkRecord) -> Result<()> {
        writeln!(self.inner, "{record}")
            .map_err(|e| BenchError::output_unavailable(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and hand back the sink
    ///
    /// # Errors
    ///
    /// Returns error if the flush fails
    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| BenchError::output_unavailable(&self.path, e))?;
        Ok(self.inner)
    }
}

/// Read all records from an artifact
///
/// A missing file yields no records.
///
/// # Errors
///
/// Returns error if the file cannot be read or a line is malformed
pub fn read_records(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| BenchError::output_unavailable(path, e))?;

    BufReader::new(file)
        .lines()
        .map(|line_result| {
            let line = line_result.map_err(|e| BenchError::output_unavailable(path, e))?;
            line.parse::<BenchmarkRecord>()
        })
        .collect()
}
