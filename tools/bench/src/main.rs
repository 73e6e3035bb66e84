#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]

//! CLI for the duplicate-counting runtime benchmark
//!
//! With no arguments: 20 entries of 10,000..200,000 values, 100 averaged calls
//! for the fast algorithms, artifacts written to `data/results_<A..E>.test`.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dupbench::{BenchConfig, BenchmarkRunner, InputPolicy, Workload};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dupbench", version, about = "Time five duplicate-counting algorithms")]
struct Cli {
    /// TOML file with configuration overrides
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory receiving results_<label>.test artifacts
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Seed the workload generator for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Timed calls per entry for averaged algorithms
    #[arg(long)]
    iterations: Option<u32>,

    /// Number of workload entries
    #[arg(long)]
    entries: Option<usize>,

    /// Length step between consecutive entries
    #[arg(long)]
    unit: Option<usize>,

    /// Reuse the sorted buffer across repeated calls of in-place sorting algorithms
    #[arg(long)]
    reuse_sorted_input: bool,
}

fn main() {
    init_tracing();

    match run(Cli::parse()) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}

/// Returns whether at least one algorithm produced its artifact
fn run(cli: Cli) -> Result<bool> {
    let config = build_config(&cli)?;

    info!(
        entries = config.shape().entry_count(),
        unit_len = config.shape().unit_len(),
        iterations = config.iterations(),
        output_dir = %config.output_dir().display(),
        seed = ?config.seed(),
        input_policy = ?config.input_policy(),
        "generating workload"
    );

    let workload = Workload::from_seed(config.shape(), config.seed())
        .context("Workload generation failed")?;

    let summary = BenchmarkRunner::new(config).run_all(&workload);

    for report in summary.completed() {
        info!(
            algorithm = %report.algorithm(),
            records = report.records_written(),
            path = %report.path().display(),
            "artifact written"
        );
    }

    Ok(summary.failed().len() < dupbench::Algorithm::ALL.len())
}

fn build_config(cli: &Cli) -> Result<BenchConfig> {
    let mut config = match &cli.config {
        Some(path) => BenchConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => BenchConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir.clone());
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(iterations) = cli.iterations {
        config = config.with_iterations(iterations);
    }
    if cli.entries.is_some() || cli.unit.is_some() {
        let shape = config.shape();
        config = config.with_shape(
            cli.entries.unwrap_or(shape.entry_count()),
            cli.unit.unwrap_or(shape.unit_len()),
        );
    }
    if cli.reuse_sorted_input {
        config = config.with_input_policy(InputPolicy::ReuseSorted);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["dupbench"]).unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "dupbench",
            "--entries",
            "4",
            "--seed",
            "11",
            "--reuse-sorted-input",
            "--output-dir",
            "out",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.shape().entry_count(), 4);
        assert_eq!(config.shape().unit_len(), 10_000);
        assert_eq!(config.seed(), Some(11));
        assert_eq!(config.input_policy(), InputPolicy::ReuseSorted);
        assert_eq!(config.output_dir(), std::path::Path::new("out"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::try_parse_from(["dupbench", "--iterations", "0"]).unwrap();
        assert!(build_config(&cli).is_err());
    }
}
