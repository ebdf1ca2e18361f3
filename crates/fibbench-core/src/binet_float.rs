//! Binet's closed form at machine (f64) precision.
//!
//! Kept as a precision/performance baseline. The 53-bit mantissa runs out
//! at F(71), and φⁿ overflows f64 from n = 1475 on, where the result
//! saturates to `f64::MAX`.

use num_bigint::BigUint;
use num_traits::FromPrimitive;

use crate::calculator::Calculator;

/// Compute F(n) as `round(φⁿ / √5)` in f64, ties to even.
///
/// # Example
/// ```
/// use fibbench_core::binet_float::fibonacci;
///
/// assert_eq!(fibonacci(10).to_string(), "55");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }

    let sqrt5 = 5f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let value = (phi.powf(n as f64) / sqrt5).round_ties_even();

    let value = if value.is_finite() { value } else { f64::MAX };
    BigUint::from_f64(value).unwrap_or_default()
}

/// Float Binet calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatBinet;

impl Calculator for FloatBinet {
    fn calculate(&self, n: u64) -> BigUint {
        fibonacci(n)
    }

    fn name(&self) -> &'static str {
        "BinetFloat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, FLOAT_BINET_OVERFLOW, MAX_EXACT_FLOAT_BINET};
    use crate::fastdoubling;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0), BigUint::from(0u32));
        assert_eq!(fibonacci(1), BigUint::from(1u32));
    }

    #[test]
    fn exact_up_to_limit() {
        for (n, &expected) in (0..=MAX_EXACT_FLOAT_BINET).zip(FIB_TABLE.iter()) {
            assert_eq!(fibonacci(n), BigUint::from(expected), "n={n}");
        }
    }

    #[test]
    fn diverges_after_limit() {
        assert_ne!(
            fibonacci(MAX_EXACT_FLOAT_BINET + 1),
            BigUint::from(FIB_TABLE[usize::try_from(MAX_EXACT_FLOAT_BINET + 1).unwrap()])
        );
        assert_ne!(fibonacci(80), fastdoubling::fibonacci(80));
        assert_eq!(fibonacci(10), fastdoubling::fibonacci(10));
    }

    #[test]
    fn saturates_on_overflow() {
        let saturated = fibonacci(FLOAT_BINET_OVERFLOW);
        assert_eq!(saturated, fibonacci(15_849));
        assert_eq!(saturated, BigUint::from_f64(f64::MAX).unwrap());
        assert!(fibonacci(FLOAT_BINET_OVERFLOW - 1) < saturated);
    }

    #[test]
    fn calculator_name() {
        assert_eq!(FloatBinet.name(), "BinetFloat");
        assert_eq!(FloatBinet.calculate(20), BigUint::from(6765u32));
    }
}
