//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use waka_params::config::{ConfigError, defaults};
use waka_params::params::ParamsError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Generic failure (exit code 1) - invalid flag or setting values.
    pub const DEFAULT: ExitCode = ExitCode::FAILURE;

    /// Config file could not be read or parsed (exit code 103).
    pub fn config_file_parse() -> ExitCode {
        ExitCode::from(103)
    }

    /// API key missing or invalid (exit code 104).
    pub fn auth() -> ExitCode {
        ExitCode::from(104)
    }
}

/// Reports a config file failure and picks the exit code.
pub fn report_config_error(error: &ConfigError) -> ExitCode {
    tracing::error!("Configuration error: {error}");
    exit_code::config_file_parse()
}

/// Reports a resolution failure and picks the exit code.
///
/// Authentication failures point the user at the key-retrieval page.
pub fn report_params_error(error: &ParamsError) -> ExitCode {
    match error {
        ParamsError::Auth(e) => {
            tracing::error!(
                "{}. Find your api key from {}",
                e.message(),
                defaults::API_KEY_URL
            );
            exit_code::auth()
        }
        ParamsError::Validation(e) => {
            tracing::error!("Failed to load command parameters: {e}");
            exit_code::DEFAULT
        }
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
