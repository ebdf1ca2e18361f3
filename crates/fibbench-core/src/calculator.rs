//! Calculator trait and the closed set of benchmarkable methods.
//!
//! `Calculator` is the common "compute F(n)" capability.
//! `Method` is the tagged variant the driver selects and the harness runs.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::binet::DecimalBinet;
use crate::binet_float::FloatBinet;
use crate::fastdoubling::FastDoubling;

/// Error type for method selection and input parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested method name is not known.
    #[error("unknown method: {0} (expected one of: fast, decimal, float)")]
    UnknownMethod(String),

    /// An index list or other input could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// A Fibonacci method.
pub trait Calculator: Send + Sync {
    /// Compute F(n).
    fn calculate(&self, n: u64) -> BigUint;

    /// Display name of the method.
    fn name(&self) -> &'static str;
}

/// The methods available for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Exact fast doubling over big integers.
    FastDoubling,
    /// Binet's formula in decimal arithmetic at `required_precision(n)`.
    DecimalBinet,
    /// Binet's formula in f64.
    #[serde(rename = "binet_float")]
    FloatBinet,
}

impl Method {
    /// Every method, in display order.
    pub const ALL: [Method; 3] = [Method::FastDoubling, Method::DecimalBinet, Method::FloatBinet];

    /// Compute F(n) with this method.
    #[must_use]
    pub fn compute(self, n: u64) -> BigUint {
        self.calculator().calculate(n)
    }

    /// The calculator implementing this method.
    #[must_use]
    pub fn calculator(self) -> &'static dyn Calculator {
        static FAST: FastDoubling = FastDoubling;
        static DECIMAL: DecimalBinet = DecimalBinet;
        static FLOAT: FloatBinet = FloatBinet;
        match self {
            Method::FastDoubling => &FAST,
            Method::DecimalBinet => &DECIMAL,
            Method::FloatBinet => &FLOAT,
        }
    }

    /// Display name, e.g. `FastDoubling`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.calculator().name()
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Method::FastDoubling => "fast",
            Method::DecimalBinet => "decimal",
            Method::FloatBinet => "float",
        }
    }

    /// Prefix used when naming artefacts such as plots.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Method::FastDoubling => "fast_doubling",
            Method::DecimalBinet => "decimal_binet",
            Method::FloatBinet => "binet_float",
        }
    }

    /// Human-readable label used in report titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::FastDoubling => "Fast Doubling",
            Method::DecimalBinet => "Decimal Binet",
            Method::FloatBinet => "Binet Float",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "fastdoubling" | "fast_doubling" | "exact" => Ok(Method::FastDoubling),
            "decimal" | "decimal_binet" | "binet" => Ok(Method::DecimalBinet),
            "float" | "binet_float" | "binet-float" => Ok(Method::FloatBinet),
            other => Err(FibError::UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys_and_aliases() {
        assert_eq!("fast".parse::<Method>().unwrap(), Method::FastDoubling);
        assert_eq!("Exact".parse::<Method>().unwrap(), Method::FastDoubling);
        assert_eq!("decimal".parse::<Method>().unwrap(), Method::DecimalBinet);
        assert_eq!("binet".parse::<Method>().unwrap(), Method::DecimalBinet);
        assert_eq!(" float ".parse::<Method>().unwrap(), Method::FloatBinet);
        assert_eq!("binet-float".parse::<Method>().unwrap(), Method::FloatBinet);
    }

    #[test]
    fn parse_unknown() {
        let err = "matrix".parse::<Method>().unwrap_err();
        assert_eq!(err, FibError::UnknownMethod("matrix".into()));
        assert!(err.to_string().contains("unknown method: matrix"));
    }

    #[test]
    fn keys_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.key().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn names_and_slugs() {
        assert_eq!(Method::FastDoubling.name(), "FastDoubling");
        assert_eq!(Method::DecimalBinet.name(), "DecimalBinet");
        assert_eq!(Method::FloatBinet.name(), "BinetFloat");
        assert_eq!(Method::DecimalBinet.slug(), "decimal_binet");
        assert_eq!(Method::FloatBinet.to_string(), "BinetFloat");
    }

    #[test]
    fn all_methods_agree_on_small_values() {
        for method in Method::ALL {
            assert_eq!(method.compute(0), BigUint::from(0u32), "{method}");
            assert_eq!(method.compute(1), BigUint::from(1u32), "{method}");
            assert_eq!(method.compute(30), BigUint::from(832_040u32), "{method}");
        }
    }
}
