//! CLI argument parsing using clap.
//!
//! Defines every flag that feeds parameter resolution, including the hidden
//! deprecated aliases.

use std::path::PathBuf;

use clap::Parser;

use crate::source::{Origin, Sources};

use super::defaults;

/// waka-params: resolve and validate activity-tracking client parameters
///
/// Reconciles command-line flags, deprecated aliases and the config file
/// into one validated parameter set.
#[derive(Debug, Parser)]
#[command(name = "waka-params")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Secret API key (overrides api_key in config file)
    #[arg(long)]
    pub key: Option<String>,

    /// API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Deprecated alias of --api-url
    #[arg(long = "apiurl", value_name = "URL", hide = true)]
    pub apiurl: Option<String>,

    /// Editor or integration name and version
    #[arg(long)]
    pub plugin: Option<String>,

    /// Seconds to wait for API responses
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub timeout: Option<String>,

    /// Disable SSL certificate verification
    #[arg(long = "no-ssl-verify")]
    pub no_ssl_verify: bool,

    /// Proxy URL: http://, https://, socks5:// or NTLM 'domain\user:pass'
    #[arg(long)]
    pub proxy: Option<String>,

    /// Custom CA certificate bundle
    #[arg(long = "ssl-certs-file", value_name = "FILE")]
    pub ssl_certs_file: Option<String>,

    /// Do not buffer heartbeats offline when the API is unreachable
    #[arg(long = "disable-offline")]
    pub disable_offline: bool,

    /// Deprecated alias of --disable-offline
    #[arg(long = "disableoffline", hide = true)]
    pub disableoffline: bool,

    /// Max offline heartbeats to sync, or "none" to sync nothing
    #[arg(
        long = "sync-offline-activity",
        value_name = "AMOUNT",
        allow_hyphen_values = true
    )]
    pub sync_offline_activity: Option<String>,

    /// Print the value of KEY from the config file and exit
    #[arg(long = "config-read", value_name = "KEY")]
    pub config_read: Option<String>,

    /// Config file section used by --config-read
    #[arg(long = "config-section", value_name = "SECTION")]
    pub config_section: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Records the flags that were actually passed.
    ///
    /// Options given on the command line become explicit values; switches
    /// only count when raised. Library defaults are registered separately so
    /// they never outrank the config file.
    #[must_use]
    pub fn to_sources(&self) -> Sources {
        let mut sources = Sources::new();

        let options = [
            ("key", &self.key),
            ("api-url", &self.api_url),
            ("apiurl", &self.apiurl),
            ("plugin", &self.plugin),
            ("timeout", &self.timeout),
            ("proxy", &self.proxy),
            ("ssl-certs-file", &self.ssl_certs_file),
            ("sync-offline-activity", &self.sync_offline_activity),
            ("config-read", &self.config_read),
            ("config-section", &self.config_section),
        ];

        for (key, value) in options {
            if let Some(value) = value {
                sources.set(Origin::Flag, key, value.as_str());
            }
        }

        let switches = [
            ("no-ssl-verify", self.no_ssl_verify),
            ("disable-offline", self.disable_offline),
            ("disableoffline", self.disableoffline),
        ];

        for (key, raised) in switches {
            if raised {
                sources.set(Origin::Flag, key, true);
            }
        }

        sources.set_default(
            Origin::Flag,
            "sync-offline-activity",
            defaults::SYNC_OFFLINE_ACTIVITY,
        );
        sources.set_default(Origin::Flag, "config-section", defaults::SETTINGS_SECTION);

        sources
    }
}
