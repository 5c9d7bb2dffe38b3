//! Assembles the source set from CLI arguments and the config file.

use std::path::{Path, PathBuf};

use crate::source::Sources;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// CLI flags and config file settings, materialized for resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Flags and `[settings]` entries as one source set
    pub sources: Sources,

    /// Parsed config file (empty if none was found)
    pub file: TomlConfig,

    /// Path the config file was read from, if any
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Builds the source set from CLI arguments and an optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if a `[settings]` entry has an unsupported type.
    pub fn from_raw(cli: &Cli, toml: Option<TomlConfig>) -> Result<Self, ConfigError> {
        let mut sources = cli.to_sources();
        let file = toml.unwrap_or_default();

        file.apply_to(&mut sources)?;

        Ok(Self {
            sources,
            file,
            path: None,
        })
    }

    /// Loads the config file and merges it with CLI arguments.
    ///
    /// Uses `cli.config` if set, otherwise `~/.wakatime.toml` when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly given config file cannot be read
    /// - The config file cannot be parsed
    /// - A `[settings]` entry has an unsupported type
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| default_config_path().filter(|p| p.is_file()));

        let toml = match path {
            Some(ref path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Some(TomlConfig::load(path)?)
            }
            None => {
                tracing::debug!("no config file found");
                None
            }
        };

        let mut loaded = Self::from_raw(cli, toml)?;
        loaded.path = path;
        Ok(loaded)
    }

    /// Returns the config file path, if one was loaded.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Returns `~/.wakatime.toml`, if the home directory is known.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(defaults::CONFIG_FILE_NAME))
}
