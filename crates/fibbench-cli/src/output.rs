//! CLI output formatting.

/// Format a time in seconds with a fixed number of decimals.
#[must_use]
pub fn format_seconds(secs: f64, decimals: usize) -> String {
    format!("{secs:.decimals$}")
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Shorten a long decimal string to its head and tail.
#[must_use]
pub fn abbreviate_digits(digits: &str, keep: usize) -> String {
    if digits.len() > 2 * keep + 3 {
        format!("{}...{}", &digits[..keep], &digits[digits.len() - keep..])
    } else {
        digits.to_string()
    }
}
