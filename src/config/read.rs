//! Parameters for `--config-read`.

use std::fmt;

use crate::params::{keys, resolve};
use crate::source::SourceSet;

use super::defaults;

/// Which config entry `--config-read` prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReadParams {
    /// Config file section, `settings` unless `--config-section` is given
    pub section: String,

    /// Key within the section
    pub key: String,
}

impl ConfigReadParams {
    /// Resolves the config-read request.
    ///
    /// Returns `None` when `--config-read` was not given.
    pub fn load<S: SourceSet + ?Sized>(sources: &S) -> Option<Self> {
        let key = resolve(sources, &keys::CONFIG_READ)
            .value()
            .map(|r| r.value.as_string())?;

        let section = resolve(sources, &keys::CONFIG_SECTION)
            .value()
            .map_or_else(|| defaults::SETTINGS_SECTION.to_string(), |r| r.value.as_string());

        tracing::debug!(section = %section, key = %key, "config read requested");

        Some(Self { section, key })
    }

    /// Formats the entry as `section.key`.
    #[must_use]
    pub fn dotted_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigReadParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}
