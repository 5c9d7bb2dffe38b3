//! waka-params: activity-tracking client parameters
//!
//! Entry point for the waka-params application.

use std::process::ExitCode;

use waka_params::config::{Cli, ConfigReadParams, LoadedConfig};
use waka_params::params::Params;

mod app;

use app::{exit_code, report_config_error, report_params_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let loaded = match LoadedConfig::load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => return report_config_error(&e),
    };

    // Handle --config-read
    if let Some(read) = ConfigReadParams::load(&loaded.sources) {
        return handle_config_read(&loaded, &read);
    }

    match Params::load(&loaded.sources) {
        Ok(params) => {
            println!("{params}");
            exit_code::SUCCESS
        }
        Err(e) => report_params_error(&e),
    }
}

/// Prints the requested config entry.
fn handle_config_read(loaded: &LoadedConfig, read: &ConfigReadParams) -> ExitCode {
    let value = loaded.file.read(read);

    if value.is_empty() {
        match loaded.path() {
            Some(path) => tracing::debug!(
                key = %read.dotted_key(),
                path = %path.display(),
                "config entry not set"
            ),
            None => tracing::debug!(key = %read.dotted_key(), "no config file to read from"),
        }
    }

    println!("{value}");
    exit_code::SUCCESS
}
