//! # fibbench-core
//!
//! Core library for the FibBench Fibonacci benchmark.
//! Implements exact Fast Doubling, Binet's formula in scoped decimal
//! arithmetic, and Binet's formula in f64.

pub mod binet;
pub mod binet_float;
pub mod calculator;
pub mod constants;
pub mod decimal;
pub mod fastdoubling;
pub mod precision;

// Re-exports
pub use calculator::{Calculator, FibError, Method};
pub use constants::{exit_codes, DEFAULT_PRINT_DECIMALS, DEFAULT_RUNS, FIB_TABLE};
pub use decimal::{Decimal, DecimalContext};
pub use fastdoubling::{fib_pair, FibPair};
pub use precision::required_precision;

use num_bigint::BigUint;

/// Compute F(n) exactly using the fast doubling algorithm.
///
/// # Example
/// ```
/// assert_eq!(fibbench_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibbench_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    fastdoubling::fibonacci(n)
}
