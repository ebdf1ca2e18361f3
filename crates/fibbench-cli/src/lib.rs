//! # fibbench-cli
//!
//! Result tables, SVG charts, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod plot;
pub mod presenter;
pub mod progress;
pub mod table;
pub mod ui;

pub use plot::SvgPlotter;
pub use presenter::TablePresenter;
pub use progress::ProgressObserver;
