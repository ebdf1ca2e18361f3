//! Observer hooks for benchmark progress.
//!
//! The harness notifies a `TrialObserver` around every timed call. Hooks run
//! outside the measured interval, so a slow observer never shows up in the
//! timings.

use std::time::Duration;

use tracing::{debug, info};

/// One timed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Zero-based trial number.
    pub trial: u32,
    /// Total number of trials in the run.
    pub trials: u32,
    /// Position of the index in the input list.
    pub position: usize,
    /// The Fibonacci index that was computed.
    pub n: u64,
    /// Wall-clock time of the single call.
    pub elapsed: Duration,
}

/// Observer trait for receiving benchmark progress.
pub trait TrialObserver {
    /// A run of `trials` passes over `indices` is about to start.
    fn on_run_start(&self, _trials: u32, _indices: usize) {}

    /// A trial is about to start.
    fn on_trial_start(&self, _trial: u32, _trials: u32) {}

    /// The harness is about to time F(n).
    fn on_compute(&self, _trial: u32, _n: u64) {}

    /// A single call was timed.
    fn on_measurement(&self, _measurement: &Measurement) {}

    /// A trial finished; `total` is the summed time of its calls.
    fn on_trial_end(&self, _trial: u32, _total: Duration) {}

    /// Every trial finished.
    fn on_run_end(&self) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TrialObserver for NoOpObserver {}

/// Observer that forwards progress to `tracing`.
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    label: String,
}

impl LoggingObserver {
    /// Create a logging observer tagging every event with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl TrialObserver for LoggingObserver {
    fn on_run_start(&self, trials: u32, indices: usize) {
        info!(method = %self.label, trials, indices, "Benchmark started");
    }

    fn on_compute(&self, trial: u32, n: u64) {
        debug!(method = %self.label, trial, n, "Computing");
    }

    fn on_measurement(&self, m: &Measurement) {
        debug!(
            method = %self.label,
            trial = m.trial,
            n = m.n,
            elapsed = ?m.elapsed,
            "Measured"
        );
    }

    fn on_trial_end(&self, trial: u32, total: Duration) {
        info!(method = %self.label, trial, total = ?total, "Trial complete");
    }

    fn on_run_end(&self) {
        info!(method = %self.label, "Benchmark complete");
    }
}

/// Fans every event out to several observers.
#[derive(Default)]
pub struct CompositeObserver<'a> {
    observers: Vec<&'a dyn TrialObserver>,
}

impl<'a> CompositeObserver<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer.
    #[must_use]
    pub fn with(mut self, observer: &'a dyn TrialObserver) -> Self {
        self.observers.push(observer);
        self
    }
}

impl TrialObserver for CompositeObserver<'_> {
    fn on_run_start(&self, trials: u32, indices: usize) {
        for o in &self.observers {
            o.on_run_start(trials, indices);
        }
    }

    fn on_trial_start(&self, trial: u32, trials: u32) {
        for o in &self.observers {
            o.on_trial_start(trial, trials);
        }
    }

    fn on_compute(&self, trial: u32, n: u64) {
        for o in &self.observers {
            o.on_compute(trial, n);
        }
    }

    fn on_measurement(&self, measurement: &Measurement) {
        for o in &self.observers {
            o.on_measurement(measurement);
        }
    }

    fn on_trial_end(&self, trial: u32, total: Duration) {
        for o in &self.observers {
            o.on_trial_end(trial, total);
        }
    }

    fn on_run_end(&self) {
        for o in &self.observers {
            o.on_run_end();
        }
    }
}
