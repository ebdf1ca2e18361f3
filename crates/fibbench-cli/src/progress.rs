//! Progress bar for benchmark runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use fibbench_harness::{Measurement, TrialObserver};

const TEMPLATE: &str = "{prefix:>12} [{bar:40.green/dim}] {pos}/{len} {msg} ETA: {eta}";

/// Observer that drives an `indicatif` bar, one tick per timed call.
///
/// The bar is updated between calls, outside the measured interval.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// A visible bar on stderr.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▉░"));
        }
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// A bar that draws nothing, for quiet runs.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl TrialObserver for ProgressObserver {
    fn on_run_start(&self, trials: u32, indices: usize) {
        self.bar.set_length(u64::from(trials) * indices as u64);
        self.bar.set_position(0);
    }

    fn on_trial_start(&self, trial: u32, trials: u32) {
        self.bar.set_message(format!("trial {}/{trials}", trial + 1));
    }

    fn on_measurement(&self, _measurement: &Measurement) {
        self.bar.inc(1);
    }

    fn on_trial_end(&self, _trial: u32, _total: Duration) {
        self.bar.tick();
    }

    fn on_run_end(&self) {
        self.bar.finish_and_clear();
    }
}
