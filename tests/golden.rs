//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks every method against
//! known Fibonacci numbers. Float Binet is only held to its exact range.

use num_bigint::BigUint;
use serde::Deserialize;

use fibbench_core::constants::MAX_EXACT_FLOAT_BINET;
use fibbench_core::Method;
use fibbench_harness::{check_accuracy, first_mismatch};

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    #[serde(default)]
    fib: Option<String>,
    #[serde(default)]
    fib_prefix: Option<String>,
    #[serde(default)]
    fib_suffix: Option<String>,
    #[serde(default)]
    fib_digits: Option<usize>,
}

impl GoldenEntry {
    fn check(&self, method: Method, value: &BigUint) {
        let s = value.to_string();
        if let Some(fib) = &self.fib {
            assert_eq!(&s, fib, "{method} F({})", self.n);
            return;
        }
        let digits = self.fib_digits.expect("entry without fib needs fib_digits");
        assert_eq!(s.len(), digits, "{method} F({}) digit count", self.n);
        if let Some(prefix) = &self.fib_prefix {
            assert!(s.starts_with(prefix.as_str()), "{method} F({}) prefix", self.n);
        }
        if let Some(suffix) = &self.fib_suffix {
            assert!(s.ends_with(suffix.as_str()), "{method} F({}) suffix", self.n);
        }
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

#[test]
fn golden_file_loads() {
    let data = load_golden_data();
    assert!(data.values.len() >= 20);
    assert!(data.values.windows(2).all(|w| w[0].n < w[1].n));
}

#[test]
fn golden_fast_doubling() {
    for entry in &load_golden_data().values {
        entry.check(Method::FastDoubling, &Method::FastDoubling.compute(entry.n));
    }
}

#[test]
fn golden_decimal_binet() {
    for entry in &load_golden_data().values {
        entry.check(Method::DecimalBinet, &Method::DecimalBinet.compute(entry.n));
    }
}

#[test]
fn golden_float_binet_exact_range() {
    let data = load_golden_data();
    let in_range: Vec<_> = data
        .values
        .iter()
        .filter(|e| e.n <= MAX_EXACT_FLOAT_BINET)
        .collect();
    assert!(!in_range.is_empty());
    for entry in in_range {
        entry.check(Method::FloatBinet, &Method::FloatBinet.compute(entry.n));
    }
}

#[test]
fn golden_float_binet_diverges_past_range() {
    for entry in load_golden_data()
        .values
        .iter()
        .filter(|e| e.n > MAX_EXACT_FLOAT_BINET)
    {
        let approx = Method::FloatBinet.compute(entry.n);
        assert_ne!(approx, Method::FastDoubling.compute(entry.n), "F({})", entry.n);
    }
}

#[test]
fn accuracy_check_over_golden_indices() {
    let indices: Vec<u64> = load_golden_data().values.iter().map(|e| e.n).collect();
    let exact = check_accuracy(Method::DecimalBinet, &indices);
    assert_eq!(first_mismatch(&exact), None);

    let float = check_accuracy(Method::FloatBinet, &indices);
    let first = first_mismatch(&float).expect("float Binet must diverge");
    assert!(first > MAX_EXACT_FLOAT_BINET);
}
