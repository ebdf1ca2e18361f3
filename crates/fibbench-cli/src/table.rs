//! Box-drawing text tables.

use std::fmt::Write as _;

use fibbench_harness::BenchmarkRun;

use crate::output::format_seconds;

enum Line {
    Cells(Vec<String>),
    Separator,
}

/// A text table drawn with box-drawing characters.
///
/// The first column is left-aligned, every other column right-aligned.
/// Column widths fit the widest cell.
pub struct Table {
    headers: Vec<String>,
    lines: Vec<Line>,
}

impl Table {
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty, extra cells are dropped.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.lines
            .push(Line::Cells(cells.into_iter().map(Into::into).collect()));
    }

    /// Append a horizontal rule.
    pub fn add_separator(&mut self) {
        self.lines.push(Line::Separator);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for line in &self.lines {
            if let Line::Cells(cells) = line {
                for (w, cell) in widths.iter_mut().zip(cells) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }

    /// Render the table, one line per row, with a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        rule(&mut out, &widths, '┌', '┬', '┐');
        cells(&mut out, &widths, &self.headers);
        rule(&mut out, &widths, '├', '┼', '┤');
        for line in &self.lines {
            match line {
                Line::Cells(row) => cells(&mut out, &widths, row),
                Line::Separator => rule(&mut out, &widths, '├', '┼', '┤'),
            }
        }
        rule(&mut out, &widths, '└', '┴', '┘');
        out
    }
}

fn rule(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&"─".repeat(w + 2));
    }
    out.push(right);
    out.push('\n');
}

fn cells(out: &mut String, widths: &[usize], row: &[String]) {
    out.push('│');
    for (i, w) in widths.iter().enumerate() {
        let cell = row.get(i).map_or("", String::as_str);
        if i == 0 {
            let _ = write!(out, " {cell:<w$} │");
        } else {
            let _ = write!(out, " {cell:>w$} │");
        }
    }
    out.push('\n');
}

/// Table of one benchmark run: a row per trial, then the `AVG` row.
#[must_use]
pub fn run_table(run: &BenchmarkRun, decimals: usize) -> Table {
    let mut table = Table::new(
        std::iter::once("Run".to_string()).chain(run.indices.iter().map(u64::to_string)),
    );
    for (trial, row) in run.trials.rows().iter().enumerate() {
        table.add_row(
            std::iter::once(trial.to_string())
                .chain(row.iter().map(|d| format_seconds(d.as_secs_f64(), decimals))),
        );
    }
    table.add_separator();
    table.add_row(
        std::iter::once("AVG".to_string()).chain(
            run.averages
                .values()
                .iter()
                .map(|&s| format_seconds(s, decimals)),
        ),
    );
    table
}
