//! Working-precision policy for the decimal Binet method.
//!
//! φⁿ has roughly `0.209 * n` integer digits, so the precision needed to
//! round φⁿ/√5 to the right integer grows linearly with `n`. The policy is
//! `max(50, n + 20)`: the floor keeps small indices stable, the margin
//! absorbs rounding in the square root and the power.

use crate::constants::{DECIMAL_PRECISION_MARGIN, MIN_DECIMAL_PRECISION};

/// Minimum number of significant digits for which
/// `binet::fibonacci(n, precision)` is exact.
///
/// Saturates at `u32::MAX` for indices whose requirement does not fit.
///
/// # Example
/// ```
/// use fibbench_core::precision::required_precision;
///
/// assert_eq!(required_precision(10), 50);
/// assert_eq!(required_precision(1000), 1020);
/// ```
#[must_use]
pub fn required_precision(n: u64) -> u32 {
    let needed = n.saturating_add(u64::from(DECIMAL_PRECISION_MARGIN));
    let needed = u32::try_from(needed).unwrap_or(u32::MAX);
    needed.max(MIN_DECIMAL_PRECISION)
}

/// Largest index a given precision is guaranteed to handle exactly.
///
/// Inverse of [`required_precision`]: Binet at precision `p` is only
/// guaranteed exact for `n <= p - 20`.
#[must_use]
pub fn max_exact_index(precision: u32) -> u64 {
    u64::from(precision.saturating_sub(DECIMAL_PRECISION_MARGIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_applies_to_small_indices() {
        assert_eq!(required_precision(0), 50);
        assert_eq!(required_precision(1), 50);
        assert_eq!(required_precision(30), 50);
    }

    #[test]
    fn linear_above_floor() {
        assert_eq!(required_precision(31), 51);
        assert_eq!(required_precision(200), 220);
        assert_eq!(required_precision(15_849), 15_869);
    }

    #[test]
    fn saturates_for_huge_indices() {
        assert_eq!(required_precision(u64::MAX), u32::MAX);
        assert_eq!(required_precision(u64::from(u32::MAX)), u32::MAX);
    }

    #[test]
    fn max_exact_index_inverts_policy() {
        for n in [31u64, 100, 1000, 12_589] {
            assert_eq!(max_exact_index(required_precision(n)), n);
        }
        assert_eq!(max_exact_index(10), 0);
    }
}
