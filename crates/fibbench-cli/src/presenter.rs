//! CLI result presenter.

use fibbench_core::Method;
use fibbench_harness::{first_mismatch, AccuracyRow, BenchmarkRun, ResultPresenter, RunMode};

use crate::output::{abbreviate_digits, format_number};
use crate::table::{run_table, Table};

/// Title printed above a run table.
#[must_use]
pub fn run_title(method: Method, mode: RunMode, repeats: usize) -> String {
    format!(
        "Results for {} Method ({} Inputs) — {repeats} runs + AVG",
        method.label(),
        mode.title()
    )
}

/// Title of the averaged-series chart.
#[must_use]
pub fn plot_title(method: Method, repeats: usize) -> String {
    format!(
        "{} Fibonacci Function (Average of {repeats} runs)",
        method.label()
    )
}

/// Renders accuracy rows as a table.
#[must_use]
pub fn accuracy_table(rows: &[AccuracyRow]) -> Table {
    let mut table = Table::new(["n", "Digits", "Exact", "Computed", "Match"]);
    for row in rows {
        let exact = row.exact.to_string();
        table.add_row([
            row.n.to_string(),
            format_number(exact.len() as u64),
            abbreviate_digits(&exact, 8),
            abbreviate_digits(&row.approx.to_string(), 8),
            if row.matches { "yes" } else { "NO" }.to_string(),
        ]);
    }
    table
}

/// Prints run tables and accuracy checks to stdout.
#[derive(Debug, Clone, Copy)]
pub struct TablePresenter {
    decimals: usize,
}

impl TablePresenter {
    #[must_use]
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }
}

impl ResultPresenter for TablePresenter {
    fn present_run(&self, title: &str, run: &BenchmarkRun) {
        println!("\n{title}");
        print!("{}", run_table(run, self.decimals).render());
    }

    fn present_accuracy(&self, rows: &[AccuracyRow]) {
        println!("\nAccuracy against Fast Doubling");
        print!("{}", accuracy_table(rows).render());
        if let Some(n) = first_mismatch(rows) {
            let mismatches = rows.iter().filter(|r| !r.matches).count();
            println!(
                "{mismatches} of {} results differ, first at n = {n}",
                rows.len()
            );
        }
    }
}
