//! Scoped decimal arithmetic for the Binet method.
//!
//! A [`DecimalContext`] carries the working precision (significant digits)
//! and every operation goes through it, so there is no process-wide
//! precision setting to leak between computations. Only the handful of
//! operations the closed form needs are provided, on non-negative values.
//!
//! Results are rounded half-even to the context precision. Division and
//! square root compute at least two extra digits plus a sticky digit before
//! rounding, which makes them correctly rounded.
//!
//! At a fixed precision the same few powers of ten come up in every
//! operation, so the context keeps the ones it has built.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// A non-negative decimal `coefficient * 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    coefficient: BigUint,
    exponent: i64,
}

impl Decimal {
    /// Build `coefficient * 10^exponent`.
    #[must_use]
    pub fn new(coefficient: BigUint, exponent: i64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigUint::zero(), 0)
    }

    #[must_use]
    pub fn one() -> Self {
        Self::new(BigUint::one(), 0)
    }

    /// Exactly 0.5.
    #[must_use]
    pub fn half() -> Self {
        Self::new(BigUint::from(5u32), -1)
    }

    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value), 0)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Integer part, truncating toward zero.
    #[must_use]
    pub fn trunc(&self) -> BigUint {
        if self.exponent >= 0 {
            &self.coefficient * pow10(self.exponent.unsigned_abs())
        } else {
            &self.coefficient / pow10(self.exponent.unsigned_abs())
        }
    }
}

/// Working precision for a single decimal computation.
#[derive(Debug, Clone)]
pub struct DecimalContext {
    precision: u32,
    powers: RefCell<HashMap<u64, Rc<BigUint>>>,
}

impl DecimalContext {
    /// Create a context with `precision` significant digits (at least 1).
    #[must_use]
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.max(1),
            powers: RefCell::new(HashMap::new()),
        }
    }

    /// `10^exp`, built once per context.
    fn pow10(&self, exp: u64) -> Rc<BigUint> {
        if let Some(power) = self.powers.borrow().get(&exp) {
            return Rc::clone(power);
        }
        let power = Rc::new(pow10(exp));
        self.powers.borrow_mut().insert(exp, Rc::clone(&power));
        power
    }

    #[cfg(test)]
    fn cached_powers(&self) -> usize {
        self.powers.borrow().len()
    }

    /// Number of decimal digits in `value` (1 for zero).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn digits(&self, value: &BigUint) -> u64 {
        if value.is_zero() {
            return 1;
        }

        // estimate from the bit length, off by at most one either way
        let mut digits = ((value.bits() - 1) as f64 * std::f64::consts::LOG10_2) as u64 + 1;
        while digits > 1 && *value < *self.pow10(digits - 1) {
            digits -= 1;
        }
        while *value >= *self.pow10(digits) {
            digits += 1;
        }
        digits
    }

    /// Round `value` to the context precision, half-even.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn round(&self, value: Decimal) -> Decimal {
        let precision = u64::from(self.precision);
        let digits = self.digits(&value.coefficient);
        if digits <= precision {
            return value;
        }

        let dropped = digits - precision;
        let divisor = self.pow10(dropped);
        let (mut kept, remainder) = value.coefficient.div_rem(&divisor);
        let mut exponent = value.exponent + dropped as i64;

        let round_up = match (remainder << 1u32).cmp(&*divisor) {
            Ordering::Greater => true,
            Ordering::Equal => kept.is_odd(),
            Ordering::Less => false,
        };

        if round_up {
            kept += 1u32;
            // 999..9 + 1 carried into an extra digit
            if kept == *self.pow10(precision) {
                kept /= 10u32;
                exponent += 1;
            }
        }

        Decimal::new(kept, exponent)
    }

    /// `a + b`, rounded.
    #[must_use]
    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        let exponent = a.exponent.min(b.exponent);
        let lhs = self.scale(&a.coefficient, a.exponent - exponent);
        let rhs = self.scale(&b.coefficient, b.exponent - exponent);
        self.round(Decimal::new(lhs + rhs, exponent))
    }

    /// `a * b`, rounded.
    #[must_use]
    pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.round(Decimal::new(
            &a.coefficient * &b.coefficient,
            a.exponent + b.exponent,
        ))
    }

    /// `a / b`, correctly rounded. Panics if `b` is zero.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn div(&self, a: &Decimal, b: &Decimal) -> Decimal {
        if a.is_zero() {
            return Decimal::zero();
        }

        let precision = i64::from(self.precision);
        let shift = (precision + 2 + self.digits(&b.coefficient) as i64
            - self.digits(&a.coefficient) as i64)
            .max(0);

        let numerator = self.scale(&a.coefficient, shift);
        let (quotient, remainder) = numerator.div_rem(&b.coefficient);
        let exponent = a.exponent - b.exponent - shift;

        self.round(sticky(quotient, exponent, !remainder.is_zero()))
    }

    /// `sqrt(a)`, correctly rounded.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn sqrt(&self, a: &Decimal) -> Decimal {
        if a.is_zero() {
            return Decimal::zero();
        }

        let precision = i64::from(self.precision);
        let mut shift = (2 * (precision + 2) - self.digits(&a.coefficient) as i64).max(0);
        if (a.exponent - shift).rem_euclid(2) != 0 {
            shift += 1;
        }

        let radicand = self.scale(&a.coefficient, shift);
        let root = radicand.sqrt();
        let inexact = &root * &root != radicand;

        self.round(sticky(root, (a.exponent - shift) / 2, inexact))
    }

    /// `base^exp` by square-and-multiply, rounding after every product.
    #[must_use]
    pub fn powi(&self, base: &Decimal, exp: u64) -> Decimal {
        let mut result = Decimal::one();
        let num_bits = 64 - exp.leading_zeros();

        for i in (0..num_bits).rev() {
            result = self.mul(&result, &result);
            if (exp >> i) & 1 == 1 {
                result = self.mul(&result, base);
            }
        }

        result
    }

    fn scale(&self, coefficient: &BigUint, shift: i64) -> BigUint {
        debug_assert!(shift >= 0);
        if shift == 0 {
            return coefficient.clone();
        }
        coefficient * &*self.pow10(shift.unsigned_abs())
    }
}

/// Append a non-zero digit when the exact result has more digits than kept,
/// so that rounding never mistakes it for an exact tie.
fn sticky(coefficient: BigUint, exponent: i64, inexact: bool) -> Decimal {
    if inexact {
        Decimal::new(coefficient * 10u32 + 1u32, exponent - 1)
    } else {
        Decimal::new(coefficient, exponent)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pow10(exp: u64) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exp as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(coefficient: u64, exponent: i64) -> Decimal {
        Decimal::new(BigUint::from(coefficient), exponent)
    }

    #[test]
    fn digit_count_boundaries() {
        let ctx = DecimalContext::new(10);
        assert_eq!(ctx.digits(&BigUint::zero()), 1);
        assert_eq!(ctx.digits(&BigUint::from(9u32)), 1);
        assert_eq!(ctx.digits(&BigUint::from(10u32)), 2);
        assert_eq!(ctx.digits(&BigUint::from(999u32)), 3);
        assert_eq!(ctx.digits(&BigUint::from(1000u32)), 4);
        assert_eq!(ctx.digits(&pow10(300)), 301);
        assert_eq!(ctx.digits(&(pow10(300) - 1u32)), 300);
        for k in 1..=60 {
            let power = pow10(k);
            assert_eq!(ctx.digits(&power), k + 1, "10^{k}");
            assert_eq!(ctx.digits(&(power - 1u32)), k, "10^{k} - 1");
        }
    }

    #[test]
    fn repeated_products_reuse_powers() {
        let ctx = DecimalContext::new(40);
        let third = ctx.div(&Decimal::one(), &dec(3, 0));
        let first = ctx.mul(&third, &third);
        let cached = ctx.cached_powers();
        assert!(cached > 0);
        for _ in 0..20 {
            assert_eq!(ctx.mul(&third, &third), first);
        }
        assert_eq!(ctx.cached_powers(), cached);
    }

    #[test]
    fn cloned_context_rounds_the_same() {
        let ctx = DecimalContext::new(5);
        let _ = ctx.div(&dec(1, 0), &dec(7, 0));
        let copy = ctx.clone();
        assert_eq!(copy.div(&dec(2, 0), &dec(3, 0)), ctx.div(&dec(2, 0), &dec(3, 0)));
    }

    #[test]
    fn round_keeps_short_values() {
        let ctx = DecimalContext::new(5);
        assert_eq!(ctx.round(dec(12_345, 0)), dec(12_345, 0));
    }

    #[test]
    fn round_half_even() {
        let ctx = DecimalContext::new(3);
        assert_eq!(ctx.round(dec(12_345, 0)), dec(123, 2));
        assert_eq!(ctx.round(dec(12_350, 0)), dec(124, 2));
        assert_eq!(ctx.round(dec(12_250, 0)), dec(122, 2));
        assert_eq!(ctx.round(dec(12_251, 0)), dec(123, 2));
    }

    #[test]
    fn round_carries_into_new_digit() {
        let ctx = DecimalContext::new(3);
        assert_eq!(ctx.round(dec(99_950, 0)), dec(100, 3));
    }

    #[test]
    fn add_aligns_exponents() {
        let ctx = DecimalContext::new(50);
        assert_eq!(ctx.add(&Decimal::one(), &Decimal::half()), dec(15, -1));
        // 10^20 + 0.5 needs 22 digits, so it is rounded away at 10
        let ctx = DecimalContext::new(10);
        let big = dec(1, 20);
        assert_eq!(ctx.add(&big, &Decimal::half()).trunc(), pow10(20));
    }

    #[test]
    fn div_rounds_correctly() {
        let ctx = DecimalContext::new(5);
        assert_eq!(ctx.div(&dec(1, 0), &dec(3, 0)), dec(33_333, -5));
        assert_eq!(ctx.div(&dec(2, 0), &dec(3, 0)), dec(66_667, -5));
        assert_eq!(ctx.div(&dec(10, 0), &dec(4, 0)), dec(25_000, -4));
        assert!(ctx.div(&Decimal::zero(), &dec(7, 0)).is_zero());
    }

    #[test]
    fn sqrt_of_five() {
        let ctx = DecimalContext::new(10);
        assert_eq!(ctx.sqrt(&dec(5, 0)), dec(2_236_067_977, -9));
    }

    #[test]
    fn sqrt_of_perfect_square_is_exact() {
        let ctx = DecimalContext::new(20);
        let root = ctx.sqrt(&dec(144, 0));
        assert_eq!(root.trunc(), BigUint::from(12u32));
        assert_eq!(ctx.mul(&root, &root).trunc(), BigUint::from(144u32));
    }

    #[test]
    fn powi_exact_when_precision_allows() {
        let ctx = DecimalContext::new(50);
        assert_eq!(ctx.powi(&dec(2, 0), 10), dec(1024, 0));
        assert_eq!(ctx.powi(&dec(7, 0), 0), Decimal::one());
    }

    #[test]
    fn powi_rounds_at_low_precision() {
        let ctx = DecimalContext::new(2);
        assert_eq!(ctx.powi(&dec(2, 0), 10), dec(10, 2));
    }

    #[test]
    fn trunc_drops_fraction() {
        assert_eq!(dec(555_036, -4).trunc(), BigUint::from(55u32));
        assert_eq!(dec(12, 3).trunc(), BigUint::from(12_000u32));
    }

    #[test]
    fn precision_is_at_least_one() {
        let ctx = DecimalContext::new(0);
        assert_eq!(ctx.round(dec(96, 0)), dec(1, 2));
    }
}
