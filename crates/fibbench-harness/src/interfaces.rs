//! Presentation interfaces implemented by the CLI.

use std::path::PathBuf;

use crate::accuracy::AccuracyRow;
use crate::harness::BenchmarkRun;

/// Trait for presenting benchmark results to the user.
pub trait ResultPresenter {
    /// Present the trial matrix and averaged row of one run.
    fn present_run(&self, title: &str, run: &BenchmarkRun);

    /// Present an accuracy comparison against the exact method.
    fn present_accuracy(&self, rows: &[AccuracyRow]);
}

/// Trait for rendering the averaged series as a chart.
pub trait Plotter {
    /// Render `run` and return the path of the written file.
    fn plot(&self, title: &str, run: &BenchmarkRun) -> std::io::Result<PathBuf>;
}
