//! Accuracy check of a method against the exact algorithm.

use num_bigint::BigUint;

use fibbench_core::{fibonacci, Method, FIB_TABLE};

/// Outcome of comparing one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccuracyRow {
    pub n: u64,
    pub exact: BigUint,
    pub approx: BigUint,
    pub matches: bool,
}

/// F(n) from the u64 table when it fits, from Fast Doubling otherwise.
fn reference(n: u64) -> BigUint {
    usize::try_from(n)
        .ok()
        .and_then(|i| FIB_TABLE.get(i))
        .map_or_else(|| fibonacci(n), |&v| BigUint::from(v))
}

/// Compare `method` with Fast Doubling at every index. Not timed.
#[must_use]
pub fn check_accuracy(method: Method, indices: &[u64]) -> Vec<AccuracyRow> {
    indices
        .iter()
        .map(|&n| {
            let exact = reference(n);
            let approx = method.compute(n);
            let matches = exact == approx;
            if !matches {
                tracing::debug!(method = %method, n, "Result differs from exact value");
            }
            AccuracyRow {
                n,
                exact,
                approx,
                matches,
            }
        })
        .collect()
}

/// First index in `rows` where the method stopped matching.
#[must_use]
pub fn first_mismatch(rows: &[AccuracyRow]) -> Option<u64> {
    rows.iter().find(|r| !r.matches).map(|r| r.n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{BIG_INPUTS, SMALL_INPUTS};

    #[test]
    fn exact_methods_always_match() {
        for method in [Method::FastDoubling, Method::DecimalBinet] {
            let rows = check_accuracy(method, &[0, 1, 10, 80, 501, 1000]);
            assert!(rows.iter().all(|r| r.matches), "{method}");
            assert_eq!(first_mismatch(&rows), None);
        }
    }

    #[test]
    fn float_matches_small_inputs() {
        let rows = check_accuracy(Method::FloatBinet, &SMALL_INPUTS);
        assert!(rows.iter().all(|r| r.matches));
    }

    #[test]
    fn float_diverges_on_big_inputs() {
        let rows = check_accuracy(Method::FloatBinet, &BIG_INPUTS);
        assert_eq!(rows.len(), BIG_INPUTS.len());
        assert!(rows.iter().all(|r| !r.matches));
        assert_eq!(first_mismatch(&rows), Some(501));
    }

    #[test]
    fn table_and_doubling_references_agree() {
        for n in [0, 1, 50, 93, 94, 95] {
            assert_eq!(reference(n), fibonacci(n), "n={n}");
        }
    }

    #[test]
    fn float_boundary() {
        let rows = check_accuracy(Method::FloatBinet, &[69, 70, 71, 72]);
        assert_eq!(first_mismatch(&rows), Some(71));
    }
}
