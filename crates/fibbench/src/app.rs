//! Application entry point and dispatch.

use anyhow::Result;

use fibbench_cli::presenter::{plot_title, run_title};
use fibbench_cli::{ui, ProgressObserver, SvgPlotter, TablePresenter};
use fibbench_harness::report::{save_to_path, BenchmarkReport, HostInfo};
use fibbench_harness::{
    affinity, check_accuracy, run_method, BenchmarkRun, CompositeObserver, LoggingObserver,
    Plotter, ResultPresenter,
};

use crate::config::{AppConfig, RunSettings};
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let settings = config.resolve().map_err(AppError::Config)?;
    run_benchmark(config, &settings)
}

fn run_benchmark(config: &AppConfig, settings: &RunSettings) -> Result<()> {
    let (method, mode, repeats) = (settings.method, settings.mode, settings.repeats);
    let indices = &settings.indices;

    if let Some(core) = config.pin_core {
        let _ = affinity::pin_current_thread(core);
    }

    if !config.quiet {
        ui::print_banner(method.name(), mode.as_str(), repeats);
    }

    let logging = LoggingObserver::new(method.name());
    let progress = if config.quiet {
        ProgressObserver::hidden()
    } else {
        ProgressObserver::new(method.name())
    };
    let observer = CompositeObserver::new().with(&logging).with(&progress);

    let run = run_method(method, indices, repeats, &observer)?;

    let presenter = TablePresenter::new(config.decimals);
    presenter.present_run(&run_title(method, mode, run.repeats()), &run);

    if config.verify {
        presenter.present_accuracy(&check_accuracy(method, indices));
    }

    if !config.no_plot {
        let plotter = SvgPlotter::new(&config.plot_dir, method.slug(), mode.as_str());
        let title = plot_title(method, run.repeats());
        let path = plotter.plot(&title, &run).map_err(|source| AppError::Output {
            path: plotter.path(),
            source,
        })?;
        if !config.quiet {
            ui::print_success(&format!("Saved graph as: {}", path.display()));
        }
    }

    if let Some(path) = &config.json {
        export_json(settings, &run, path)?;
        if !config.quiet {
            ui::print_success(&format!("Saved report as: {}", path.display()));
        }
    }

    Ok(())
}

fn export_json(settings: &RunSettings, run: &BenchmarkRun, path: &std::path::Path) -> Result<()> {
    let report = BenchmarkReport::new(settings.method, settings.mode, run, HostInfo::current());
    save_to_path(&report, path).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Report written");
    Ok(())
}
