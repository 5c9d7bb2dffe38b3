//! Configuration layer for waka-params.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Source set assembly from both ([`LoadedConfig`])
//! - `--config-read` requests ([`ConfigReadParams`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! Flags and the `[settings]` section of the config file end up in one
//! [`Sources`](crate::source::Sources) value. Only flags actually passed on
//! the command line are recorded as explicitly set; built-in defaults such as
//! `--sync-offline-activity 100` are registered as defaults and therefore
//! never shadow a config file entry.
//!
//! Which source wins for a given field is decided by the precedence table in
//! [`crate::params::keys`], not here.
//!
//! # Boolean Flag Semantics
//!
//! Switches (`--no-ssl-verify`, `--disable-offline`) can only be raised:
//! passing one records `true`, omitting it records nothing. A config file
//! entry set to `false` is still an explicit value.
//!
//! # Config File Location
//!
//! `--config <PATH>` if given (a missing file is an error), otherwise
//! `~/.wakatime.toml` if it exists.

mod cli;
pub mod defaults;
mod error;
mod loader;
mod read;
mod toml;

#[cfg(test)]
mod toml_tests;

pub use cli::Cli;
pub use error::ConfigError;
pub use loader::{LoadedConfig, default_config_path};
pub use read::ConfigReadParams;
pub use toml::TomlConfig;
