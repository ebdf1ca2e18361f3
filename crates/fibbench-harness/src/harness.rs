//! Repeated-trial benchmark harness.
//!
//! For each of `repeats` trials, every index is timed with a single call of
//! the compute function, in order, on the calling thread. The harness is
//! algorithm-agnostic: anything `FnMut(u64) -> Result<T, E>` can be timed.

use std::convert::Infallible;
use std::hint::black_box;
use std::time::{Duration, Instant};

use fibbench_core::{binet, required_precision, Method};

use crate::observer::{Measurement, NoOpObserver, TrialObserver};

/// Error type for benchmark runs.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError<E> {
    /// A run needs at least one trial.
    #[error("repeat count must be at least 1")]
    ZeroRepeats,

    /// The compute function failed; the run was aborted.
    #[error("computation failed for n={n} in trial {trial}: {source}")]
    Compute {
        /// Trial in which the failure happened.
        trial: u32,
        /// Index being computed.
        n: u64,
        /// The error raised by the compute function.
        source: E,
    },
}

/// Rows handed to [`TrialMatrix::from_rows`] that differ in length.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("trial {trial} has {len} measurements, expected {expected}")]
pub struct RaggedRows {
    pub trial: usize,
    pub len: usize,
    pub expected: usize,
}

/// Per-trial timings: one row per trial, one column per index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrialMatrix {
    rows: Vec<Vec<Duration>>,
}

impl TrialMatrix {
    /// Build a matrix from rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<Duration>>) -> Result<Self, RaggedRows> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((trial, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(RaggedRows {
                trial,
                len: row.len(),
                expected,
            });
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Duration>] {
        &self.rows
    }

    /// Number of trials.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.rows.len()
    }

    /// Number of indices per trial.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn column(&self, position: usize) -> impl Iterator<Item = Duration> + '_ {
        self.rows.iter().map(move |row| row[position])
    }

    /// Column-wise arithmetic mean, in seconds.
    ///
    /// Each column is summed exactly as `Duration` and divided once, so
    /// sub-nanosecond means are kept.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn averages(&self) -> AveragedSeries {
        if self.rows.is_empty() {
            return AveragedSeries::default();
        }
        let trials = self.trials() as f64;
        let values = (0..self.width())
            .map(|i| self.column(i).sum::<Duration>().as_secs_f64() / trials)
            .collect();
        AveragedSeries { values }
    }
}

/// Mean time per index across all trials, in seconds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AveragedSeries {
    values: Vec<f64>,
}

impl AveragedSeries {
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Output of one harness invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Indices in the order they were timed.
    pub indices: Vec<u64>,
    /// Every measurement.
    pub trials: TrialMatrix,
    /// Column means of `trials`.
    pub averages: AveragedSeries,
}

impl BenchmarkRun {
    /// Split into the trial matrix and the averaged series.
    #[must_use]
    pub fn into_parts(self) -> (TrialMatrix, AveragedSeries) {
        (self.trials, self.averages)
    }

    /// Number of trials per index.
    #[must_use]
    pub fn repeats(&self) -> usize {
        self.trials.trials()
    }
}

/// Time `compute` over `indices`, `repeats` times.
///
/// # Example
/// ```
/// use fibbench_harness::harness::run;
///
/// let fib = |n| Ok::<_, std::convert::Infallible>(fibbench_core::fibonacci(n));
/// let run = run(fib, &[5, 10, 15], 3).unwrap();
/// assert_eq!(run.trials.trials(), 3);
/// assert_eq!(run.averages.values().len(), 3);
/// ```
pub fn run<F, T, E>(compute: F, indices: &[u64], repeats: u32) -> Result<BenchmarkRun, HarnessError<E>>
where
    F: FnMut(u64) -> Result<T, E>,
{
    run_with_observer(compute, indices, repeats, &NoOpObserver::new())
}

/// Time `compute` over `indices`, `repeats` times, reporting to `observer`.
///
/// The first failing call aborts the run and its error is returned.
pub fn run_with_observer<F, T, E>(
    compute: F,
    indices: &[u64],
    repeats: u32,
    observer: &dyn TrialObserver,
) -> Result<BenchmarkRun, HarnessError<E>>
where
    F: FnMut(u64) -> Result<T, E>,
{
    run_prepared(std::convert::identity, compute, indices, repeats, observer)
}

/// Like [`run_with_observer`], with a per-call `prepare` step.
///
/// `prepare(n)` runs before the clock starts and its output is handed to
/// `compute`, so only `compute` is timed.
pub fn run_prepared<P, A, F, T, E>(
    mut prepare: P,
    mut compute: F,
    indices: &[u64],
    repeats: u32,
    observer: &dyn TrialObserver,
) -> Result<BenchmarkRun, HarnessError<E>>
where
    P: FnMut(u64) -> A,
    F: FnMut(A) -> Result<T, E>,
{
    if repeats == 0 {
        return Err(HarnessError::ZeroRepeats);
    }

    observer.on_run_start(repeats, indices.len());

    let mut rows = Vec::with_capacity(repeats as usize);
    for trial in 0..repeats {
        observer.on_trial_start(trial, repeats);

        let mut row = Vec::with_capacity(indices.len());
        for (position, &n) in indices.iter().enumerate() {
            observer.on_compute(trial, n);
            let args = prepare(n);

            let start = Instant::now();
            let outcome = compute(args);
            let elapsed = start.elapsed();

            let value = outcome.map_err(|source| HarnessError::Compute { trial, n, source })?;
            black_box(value);

            observer.on_measurement(&Measurement {
                trial,
                trials: repeats,
                position,
                n,
                elapsed,
            });
            row.push(elapsed);
        }

        observer.on_trial_end(trial, row.iter().sum());
        rows.push(row);
    }

    observer.on_run_end();

    let trials = TrialMatrix { rows };
    let averages = trials.averages();
    Ok(BenchmarkRun {
        indices: indices.to_vec(),
        trials,
        averages,
    })
}

/// Benchmark one of the built-in methods.
///
/// The decimal Binet precision `required_precision(n)` is chosen before the
/// clock starts, so only the evaluation itself is timed.
pub fn run_method(
    method: Method,
    indices: &[u64],
    repeats: u32,
    observer: &dyn TrialObserver,
) -> Result<BenchmarkRun, HarnessError<Infallible>> {
    match method {
        Method::DecimalBinet => run_prepared(
            |n| (n, required_precision(n)),
            |(n, precision)| Ok::<_, Infallible>(binet::fibonacci(n, precision)),
            indices,
            repeats,
            observer,
        ),
        Method::FastDoubling | Method::FloatBinet => {
            let calc = method.calculator();
            run_with_observer(
                |n| Ok::<_, Infallible>(calc.calculate(n)),
                indices,
                repeats,
                observer,
            )
        }
    }
}
