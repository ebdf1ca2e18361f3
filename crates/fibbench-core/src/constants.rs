//! Constants for precision selection, benchmark defaults and exit codes.

/// Minimum working precision (significant digits) for the decimal Binet method.
pub const MIN_DECIMAL_PRECISION: u32 = 50;

/// Extra digits on top of `n` absorbing rounding in the square root and power.
pub const DECIMAL_PRECISION_MARGIN: u32 = 20;

/// Largest index for which the f64 Binet formula still matches the exact value.
/// F(71) is the first term it gets wrong.
pub const MAX_EXACT_FLOAT_BINET: u64 = 70;

/// First index for which φⁿ overflows an f64.
pub const FLOAT_BINET_OVERFLOW: u64 = 1475;

/// Default number of timed trials per index.
pub const DEFAULT_RUNS: u32 = 3;

/// Default number of decimals when printing timings in seconds.
pub const DEFAULT_PRINT_DECIMALS: usize = 8;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. The accuracy check reads small exact values from here.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `fibbench` binary.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
