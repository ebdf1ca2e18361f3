//! Binet's closed form evaluated in arbitrary-precision decimal arithmetic.
//!
//! F(n) = round(φⁿ / √5) with φ = (1 + √5) / 2. The precision is an
//! explicit argument: at precision `p` the result is only guaranteed exact
//! for `n <= p - 20` (see [`crate::precision::required_precision`]). Below
//! that the method silently returns a wrong but plausible integer.

use num_bigint::BigUint;

use crate::calculator::Calculator;
use crate::decimal::{Decimal, DecimalContext};
use crate::precision::required_precision;

/// Compute F(n) via Binet's formula at `precision` significant digits.
///
/// # Example
/// ```
/// use fibbench_core::binet::fibonacci;
///
/// assert_eq!(fibonacci(10, 50).to_string(), "55");
/// ```
#[must_use]
pub fn fibonacci(n: u64, precision: u32) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }

    let ctx = DecimalContext::new(precision);

    let five = Decimal::from_u64(5);
    let sqrt5 = ctx.sqrt(&five);
    let phi = ctx.div(&ctx.add(&Decimal::one(), &sqrt5), &Decimal::from_u64(2));
    let value = ctx.div(&ctx.powi(&phi, n), &sqrt5);

    // value > 0 for n >= 2, so adding one half and truncating rounds half-up
    ctx.add(&value, &Decimal::half()).trunc()
}

/// Decimal Binet calculator.
///
/// Uses [`required_precision`] for each index, which keeps every result exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalBinet;

impl Calculator for DecimalBinet {
    fn calculate(&self, n: u64) -> BigUint {
        fibonacci(n, required_precision(n))
    }

    fn name(&self) -> &'static str {
        "DecimalBinet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;
    use crate::fastdoubling;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0, 50), BigUint::from(0u32));
        assert_eq!(fibonacci(1, 50), BigUint::from(1u32));
        // precision is irrelevant below 2
        assert_eq!(fibonacci(1, 1), BigUint::from(1u32));
    }

    #[test]
    fn exact_for_table_range() {
        for (n, &expected) in (0u64..).zip(FIB_TABLE.iter()) {
            assert_eq!(
                fibonacci(n, required_precision(n)),
                BigUint::from(expected),
                "n={n}"
            );
        }
    }

    #[test]
    fn even_and_odd_indices_round_correctly() {
        // psi^n/sqrt5 is positive for even n and negative for odd n
        assert_eq!(fibonacci(10, 50), BigUint::from(55u32));
        assert_eq!(fibonacci(11, 50), BigUint::from(89u32));
        assert_eq!(fibonacci(2, 50), BigUint::from(1u32));
        assert_eq!(fibonacci(3, 50), BigUint::from(2u32));
    }

    #[test]
    fn exact_with_required_precision() {
        for n in [10u64, 50, 200, 1000] {
            assert_eq!(
                fibonacci(n, required_precision(n)),
                fastdoubling::fibonacci(n),
                "F({n}) mismatch"
            );
        }
    }

    #[test]
    fn wrong_with_insufficient_precision() {
        let approx = fibonacci(1000, 30);
        let exact = fastdoubling::fibonacci(1000);
        assert_ne!(approx, exact);
        // still the right magnitude
        assert_eq!(approx.to_string().len(), exact.to_string().len());
    }

    #[test]
    fn calculator_uses_policy() {
        assert_eq!(DecimalBinet.calculate(300), fastdoubling::fibonacci(300));
        assert_eq!(DecimalBinet.calculate(1000), fibonacci(1000, 1020));
        assert_eq!(DecimalBinet.name(), "DecimalBinet");
    }
}
