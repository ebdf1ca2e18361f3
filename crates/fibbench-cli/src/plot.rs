//! SVG line chart of averaged timings.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use fibbench_harness::{BenchmarkRun, Plotter};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;

/// File name of the chart for one method and input set.
#[must_use]
pub fn plot_file_name(slug: &str, mode: &str) -> String {
    format!("{slug}_avg_{mode}.svg")
}

/// Linear map from a data range onto a pixel range.
#[derive(Debug, Clone, Copy)]
struct Scale {
    lo: f64,
    hi: f64,
    from: f64,
    to: f64,
}

impl Scale {
    fn new(lo: f64, hi: f64, from: f64, to: f64) -> Self {
        // a degenerate range still gets a usable axis
        let hi = if hi > lo { hi } else { lo + 1.0 };
        Self { lo, hi, from, to }
    }

    fn map(self, v: f64) -> f64 {
        self.from + (v - self.lo) / (self.hi - self.lo) * (self.to - self.from)
    }

    #[allow(clippy::cast_precision_loss)]
    fn ticks(self) -> impl Iterator<Item = f64> {
        (0..=TICKS).map(move |i| self.lo + (self.hi - self.lo) * i as f64 / TICKS as f64)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `(indices[i], seconds[i])` as a standalone SVG document.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_svg(title: &str, indices: &[u64], seconds: &[f64]) -> String {
    let xs: Vec<f64> = indices.iter().map(|&n| n as f64).collect();
    let x_lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (x_lo, x_hi) = if xs.is_empty() { (0.0, 1.0) } else { (x_lo, x_hi) };
    let y_hi = seconds.iter().copied().fold(0.0, f64::max);

    let x = Scale::new(x_lo, x_hi, MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
    let y = Scale::new(0.0, y_hi, HEIGHT - MARGIN_BOTTOM, MARGIN_TOP);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="28" text-anchor="middle" font-size="16">{}</text>"#,
        WIDTH / 2.0,
        escape(title)
    );

    // grid and tick labels
    for tx in x.ticks() {
        let px = x.map(tx);
        let _ = writeln!(
            svg,
            r##"<line x1="{px:.1}" y1="{MARGIN_TOP}" x2="{px:.1}" y2="{}" stroke="#ddd"/>"##,
            HEIGHT - MARGIN_BOTTOM
        );
        let _ = writeln!(
            svg,
            r#"<text x="{px:.1}" y="{}" text-anchor="middle">{tx:.0}</text>"#,
            HEIGHT - MARGIN_BOTTOM + 18.0
        );
    }
    for ty in y.ticks() {
        let py = y.map(ty);
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{py:.1}" x2="{}" y2="{py:.1}" stroke="#ddd"/>"##,
            WIDTH - MARGIN_RIGHT
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" text-anchor="end">{ty:.2e}</text>"#,
            MARGIN_LEFT - 6.0,
            py + 4.0
        );
    }

    // axes
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{0}" x2="{1}" y2="{0}" stroke="black"/>"#,
        HEIGHT - MARGIN_BOTTOM,
        WIDTH - MARGIN_RIGHT
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{}" stroke="black"/>"#,
        HEIGHT - MARGIN_BOTTOM
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle">n-th Fibonacci Term</text>"#,
        (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0,
        HEIGHT - 15.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{0}" text-anchor="middle" transform="rotate(-90 20 {0})">Time (s)</text>"#,
        (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0
    );

    let points: Vec<(f64, f64)> = xs
        .iter()
        .zip(seconds)
        .map(|(&n, &s)| (x.map(n), y.map(s)))
        .collect();
    let path = points
        .iter()
        .map(|(px, py)| format!("{px:.1},{py:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        svg,
        r##"<polyline points="{path}" fill="none" stroke="#1f77b4" stroke-width="2"/>"##
    );
    for (px, py) in &points {
        let _ = writeln!(
            svg,
            r##"<circle cx="{px:.1}" cy="{py:.1}" r="3.5" fill="#1f77b4"/>"##
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes averaged-series charts into a directory.
#[derive(Debug, Clone)]
pub struct SvgPlotter {
    dir: PathBuf,
    file_name: String,
}

impl SvgPlotter {
    /// Chart for method `slug` on input set `mode`, written under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, slug: &str, mode: &str) -> Self {
        Self {
            dir: dir.into(),
            file_name: plot_file_name(slug, mode),
        }
    }

    /// Where the chart will be written.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    fn write(&self, path: &Path, svg: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, svg)
    }
}

impl Plotter for SvgPlotter {
    fn plot(&self, title: &str, run: &BenchmarkRun) -> std::io::Result<PathBuf> {
        let svg = render_svg(title, &run.indices, run.averages.values());
        let path = self.path();
        self.write(&path, &svg)?;
        tracing::debug!(path = %path.display(), "Chart written");
        Ok(path)
    }
}
