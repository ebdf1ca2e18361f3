//! Benchmark harness for the Fibonacci methods.
//!
//! Times any `FnMut(u64) -> Result<T, E>` over a list of indices for a
//! number of trials and averages the results per index.

pub mod accuracy;
pub mod affinity;
pub mod harness;
pub mod inputs;
pub mod interfaces;
pub mod observer;
pub mod report;

pub use accuracy::{check_accuracy, first_mismatch, AccuracyRow};
pub use harness::{
    run, run_method, run_prepared, run_with_observer, AveragedSeries, BenchmarkRun, HarnessError,
    RaggedRows, TrialMatrix,
};
pub use inputs::{parse_indices, RunMode, BIG_INPUTS, SMALL_INPUTS};
pub use interfaces::{Plotter, ResultPresenter};
pub use observer::{CompositeObserver, LoggingObserver, Measurement, NoOpObserver, TrialObserver};
pub use report::{BenchmarkReport, HostInfo};
