//! Error types for configuration file loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers reading and parsing the config file. Resolution and validation
/// errors live in [`crate::params`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A settings entry is not a string, integer or boolean.
    #[error("Unsupported value for '{section}.{key}': expected string, integer or boolean, got {kind}")]
    UnsupportedValue {
        /// Section holding the entry
        section: String,
        /// Key of the entry
        key: String,
        /// TOML type that was found
        kind: &'static str,
    },
}
