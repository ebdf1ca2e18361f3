//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibbench_core::{FibError, Method, DEFAULT_PRINT_DECIMALS, DEFAULT_RUNS};
use fibbench_harness::{parse_indices, RunMode};

/// fibbench: time exact and Binet-formula Fibonacci algorithms.
#[derive(Parser, Debug)]
#[command(name = "fibbench", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Method to benchmark: fast, decimal, or float.
    #[arg(short, long, default_value = "fast", env = "FIBBENCH_METHOD")]
    pub method: String,

    /// Input set: small or big.
    #[arg(long, default_value = "small", env = "FIBBENCH_MODE")]
    pub mode: String,

    /// Comma-separated indices to time instead of a built-in input set.
    #[arg(long)]
    pub inputs: Option<String>,

    /// Number of trials per index.
    #[arg(short, long, default_value_t = DEFAULT_RUNS, env = "FIBBENCH_RUNS")]
    pub runs: u32,

    /// Decimals printed in the results table.
    #[arg(long, default_value_t = DEFAULT_PRINT_DECIMALS)]
    pub decimals: usize,

    /// Directory the SVG chart is written to.
    #[arg(long, default_value = ".")]
    pub plot_dir: PathBuf,

    /// Skip the SVG chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Also export the run as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Compare every result with the exact method.
    #[arg(long)]
    pub verify: bool,

    /// Pin the benchmark thread to this CPU core.
    #[arg(long)]
    pub pin_core: Option<usize>,

    /// Quiet mode (results table only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub method: Method,
    pub mode: RunMode,
    pub indices: Vec<u64>,
    pub repeats: u32,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check the flags and resolve method, input set and repeat count.
    pub fn resolve(&self) -> Result<RunSettings, FibError> {
        let method: Method = self.method.parse()?;
        if self.runs == 0 {
            return Err(FibError::InvalidInput("--runs must be at least 1".into()));
        }

        let (mode, indices) = if let Some(list) = &self.inputs {
            (RunMode::Custom, parse_indices(list)?)
        } else {
            let mode: RunMode = self.mode.parse()?;
            if mode == RunMode::Custom {
                return Err(FibError::InvalidInput(
                    "--mode custom needs an --inputs list".into(),
                ));
            }
            (mode, mode.indices().to_vec())
        };

        Ok(RunSettings {
            method,
            mode,
            indices,
            repeats: self.runs,
        })
    }
}
