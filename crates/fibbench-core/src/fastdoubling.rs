//! Exact Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates from MSB to LSB of `n`, so the loop runs `log2(n)` times and
//! the cost is dominated by big-integer multiplication, not by step count.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::Calculator;

/// The running pair `(F(k), F(k+1))` of the doubling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibPair {
    /// F(k).
    pub low: BigUint,
    /// F(k+1).
    pub high: BigUint,
}

impl FibPair {
    /// The pair for k = 0: (F(0), F(1)) = (0, 1).
    #[must_use]
    pub fn origin() -> Self {
        Self {
            low: BigUint::zero(),
            high: BigUint::one(),
        }
    }

    /// Advance from (F(k), F(k+1)) to (F(2k), F(2k+1)).
    fn double(&mut self) {
        // t = 2*F(k+1) - F(k), never negative since F(k+1) >= F(k)
        let mut t = &self.high << 1u32;
        t -= &self.low;

        let f2k = &self.low * &t;
        let f2k1 = &self.low * &self.low + &self.high * &self.high;

        self.low = f2k;
        self.high = f2k1;
    }

    /// Advance from (F(m), F(m+1)) to (F(m+1), F(m+2)).
    fn step(&mut self) {
        std::mem::swap(&mut self.low, &mut self.high);
        self.high += &self.low;
    }
}

/// Compute the pair (F(n), F(n+1)).
///
/// # Example
/// ```
/// use fibbench_core::fastdoubling::fib_pair;
///
/// let pair = fib_pair(10);
/// assert_eq!(pair.low.to_string(), "55");
/// assert_eq!(pair.high.to_string(), "89");
/// ```
#[must_use]
pub fn fib_pair(n: u64) -> FibPair {
    let mut pair = FibPair::origin();
    let num_bits = 64 - n.leading_zeros();

    for i in (0..num_bits).rev() {
        pair.double();
        if (n >> i) & 1 == 1 {
            pair.step();
        }
    }

    pair
}

/// Compute F(n) exactly.
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }
    fib_pair(n).low
}

/// Exact Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibbench_core::calculator::Calculator;
/// use fibbench_core::fastdoubling::FastDoubling;
///
/// let result = FastDoubling.calculate(100);
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FastDoubling;

impl Calculator for FastDoubling {
    fn calculate(&self, n: u64) -> BigUint {
        fibonacci(n)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
