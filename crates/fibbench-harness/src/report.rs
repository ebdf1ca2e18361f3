//! Serializable benchmark report (JSON export).

use std::path::Path;

use serde::Serialize;

use fibbench_core::Method;

use crate::harness::BenchmarkRun;
use crate::inputs::RunMode;

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// Machine the benchmark ran on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct HostInfo {
    /// CPU model string, empty if unknown.
    pub cpu_model: String,
    /// Number of logical CPUs.
    pub num_cores: usize,
}

impl HostInfo {
    /// Describe the current machine.
    #[must_use]
    pub fn current() -> Self {
        Self {
            cpu_model: cpu_model(),
            num_cores: num_cpus(),
        }
    }
}

/// One benchmark run, with timings in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Format version of the exported JSON.
    pub version: u32,
    /// Method that was timed.
    pub method: Method,
    /// Input set name (`small`, `big` or `custom`).
    pub mode: String,
    /// Number of trials per index.
    pub repeats: usize,
    /// Indices in timing order.
    pub indices: Vec<u64>,
    /// Seconds per call, one row per trial.
    pub trials: Vec<Vec<f64>>,
    /// Mean seconds per index.
    pub averages: Vec<f64>,
    /// Machine description.
    pub host: HostInfo,
    /// Creation time.
    pub timestamp: String,
}

impl BenchmarkReport {
    /// Snapshot `run` for export.
    #[must_use]
    pub fn new(method: Method, mode: RunMode, run: &BenchmarkRun, host: HostInfo) -> Self {
        Self {
            version: REPORT_VERSION,
            method,
            mode: mode.as_str().to_string(),
            repeats: run.repeats(),
            indices: run.indices.clone(),
            trials: run
                .trials
                .rows()
                .iter()
                .map(|row| row.iter().map(std::time::Duration::as_secs_f64).collect())
                .collect(),
            averages: run.averages.values().to_vec(),
            host,
            timestamp: current_timestamp(),
        }
    }
}

/// Write `report` as pretty-printed JSON.
pub fn save_to_path(report: &BenchmarkReport, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}

fn num_cpus() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZero::get)
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map_or_else(String::new, |cpu| cpu.brand().trim().to_string())
}

/// Get the current timestamp as seconds since the Unix epoch.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
