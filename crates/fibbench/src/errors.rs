//! Error handling and exit codes.

use std::path::PathBuf;

use fibbench_core::{exit_codes, FibError};

/// Errors raised by the driver itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad flags or environment.
    #[error("invalid configuration")]
    Config(#[from] FibError),

    /// A chart or report could not be written.
    #[error("failed to write {}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Map an error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return match app {
            AppError::Config(_) => exit_codes::ERROR_CONFIG,
            AppError::Output { .. } => exit_codes::ERROR_GENERIC,
        };
    }
    if err.downcast_ref::<FibError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let config = anyhow::Error::from(AppError::Config(FibError::UnknownMethod("x".into())));
        assert_eq!(exit_code(&config), 4);

        let bare = anyhow::Error::from(FibError::InvalidInput("bad".into()));
        assert_eq!(exit_code(&bare), 4);

        let output = anyhow::Error::from(AppError::Output {
            path: PathBuf::from("out.svg"),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(exit_code(&output), 1);
        assert_eq!(output.to_string(), "failed to write out.svg");
        assert_eq!(format!("{output:#}"), "failed to write out.svg: disk full");

        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
