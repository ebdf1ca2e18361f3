//! Benchmark input sets.

use std::fmt;
use std::str::FromStr;

use fibbench_core::FibError;

/// Small indices, where every method is fast and float Binet is still exact.
pub const SMALL_INPUTS: [u64; 17] = [
    5, 7, 10, 12, 15, 17, 20, 22, 25, 27, 30, 32, 35, 37, 40, 42, 45,
];

/// Big indices, roughly log-spaced from 500 to 16 000.
pub const BIG_INPUTS: [u64; 16] = [
    501, 631, 794, 1000, 1259, 1585, 1995, 2512, 3162, 3981, 5012, 6310, 7943, 10000, 12589,
    15849,
];

/// Which input set a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Small,
    Big,
    /// A user-supplied index list.
    Custom,
}

impl RunMode {
    /// Built-in indices for this mode; empty for `Custom`.
    #[must_use]
    pub fn indices(self) -> &'static [u64] {
        match self {
            RunMode::Small => &SMALL_INPUTS,
            RunMode::Big => &BIG_INPUTS,
            RunMode::Custom => &[],
        }
    }

    /// Lower-case name used in file names and banners.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Small => "small",
            RunMode::Big => "big",
            RunMode::Custom => "custom",
        }
    }

    /// Capitalised name used in table titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            RunMode::Small => "Small",
            RunMode::Big => "Big",
            RunMode::Custom => "Custom",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(RunMode::Small),
            "big" => Ok(RunMode::Big),
            "custom" => Ok(RunMode::Custom),
            other => Err(FibError::InvalidInput(format!(
                "run mode must be 'small' or 'big', got '{other}'"
            ))),
        }
    }
}

/// Parse a comma-separated index list such as `"5, 10,15"`.
pub fn parse_indices(s: &str) -> Result<Vec<u64>, FibError> {
    let indices = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map_err(|e| FibError::InvalidInput(format!("bad index '{part}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if indices.is_empty() {
        return Err(FibError::InvalidInput("index list is empty".into()));
    }
    Ok(indices)
}
