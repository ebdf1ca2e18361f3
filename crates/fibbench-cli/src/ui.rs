//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Banner printed before a run starts.
#[must_use]
pub fn banner_text(method: &str, mode: &str, runs: u32) -> String {
    format!("Running {method} benchmark with RUN_MODE='{mode}', RUNS={runs}")
}

/// Print the run banner.
pub fn print_banner(method: &str, mode: &str, runs: u32) {
    let text = banner_text(method, mode, runs);
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner() {
        assert_eq!(
            banner_text("FastDoubling", "small", 3),
            "Running FastDoubling benchmark with RUN_MODE='small', RUNS=3"
        );
    }

    #[test]
    fn print_functions_do_not_panic() {
        print_banner("DecimalBinet", "big", 1);
        print_success("Saved graph as: x.svg");
        print_error("Something went wrong");
        print_error("");
    }
}
