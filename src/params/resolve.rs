//! Generic precedence resolution.
//!
//! Every logical field is described by a [`SourceKey`]: the ordered list of
//! places it may be defined, highest precedence first. [`resolve`] walks that
//! list once and returns the first candidate that was explicitly set. There
//! is no merging; lower ranks are never consulted once a higher rank
//! qualifies.

use std::fmt;

use crate::source::{Lookup, Origin, SourceSet, Value};

/// One place a logical field may be defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Origin holding the key.
    pub origin: Origin,
    /// Key within the origin.
    pub key: &'static str,
    /// Boolean values from this candidate are inverted after resolution.
    pub negated: bool,
}

impl Candidate {
    /// A command-line flag candidate.
    #[must_use]
    pub const fn flag(key: &'static str) -> Self {
        Self {
            origin: Origin::Flag,
            key,
            negated: false,
        }
    }

    /// A config file candidate from the `[settings]` section.
    #[must_use]
    pub const fn config(key: &'static str) -> Self {
        Self {
            origin: Origin::Config,
            key,
            negated: false,
        }
    }

    /// Marks the candidate's boolean as having the opposite meaning of the field.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Returns true if `value` counts as explicitly set for this candidate.
    ///
    /// Blank strings never qualify. Flag booleans are switches: `false` is a
    /// switch that was not raised.
    fn qualifies(&self, value: &Value) -> bool {
        if value.is_blank() {
            return false;
        }

        !matches!((self.origin, value), (Origin::Flag, Value::Bool(false)))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Origin::Flag => write!(f, "--{}", self.key),
            Origin::Config => write!(f, "settings.{}", self.key),
        }
    }
}

/// Ordered candidates for one logical field, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceKey {
    /// Field name used in diagnostics.
    pub field: &'static str,
    /// Candidates in precedence order.
    pub candidates: &'static [Candidate],
}

/// The winning candidate and its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Candidate the value came from.
    pub candidate: Candidate,
    /// Raw value as stored in the source.
    pub value: &'a Value,
}

impl Resolved<'_> {
    /// Coerces the value to a boolean, applying the candidate's negation.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool().map(|b| b ^ self.candidate.negated)
    }
}

/// Resolves one logical field against the source set.
///
/// Returns [`Lookup::Set`] for the first candidate that was explicitly set,
/// otherwise [`Lookup::Default`] for the first candidate carrying a library
/// default, otherwise [`Lookup::Absent`].
pub fn resolve<'a, S>(sources: &'a S, key: &SourceKey) -> Lookup<Resolved<'a>>
where
    S: SourceSet + ?Sized,
{
    let mut fallback = Lookup::Absent;

    for &candidate in key.candidates {
        match sources.lookup(candidate.origin, candidate.key) {
            Lookup::Set(value) if candidate.qualifies(value) => {
                tracing::debug!(
                    field = key.field,
                    source = %candidate,
                    "resolved from explicit value"
                );
                return Lookup::Set(Resolved { candidate, value });
            }
            Lookup::Default(value) if matches!(fallback, Lookup::Absent) => {
                fallback = Lookup::Default(Resolved { candidate, value });
            }
            _ => {}
        }
    }

    if let Lookup::Default(resolved) = &fallback {
        tracing::debug!(field = key.field, source = %resolved.candidate, "resolved from default");
    }

    fallback
}

/// Precedence table for every logical field.
pub mod keys {
    use super::{Candidate, SourceKey};
    use crate::source::Origin;

    /// Secret API key.
    pub const API_KEY: SourceKey = SourceKey {
        field: "api_key",
        candidates: &[
            Candidate::flag("key"),
            Candidate::config("api_key"),
            Candidate::config("apikey"),
        ],
    };

    /// API base URL. The deprecated flag outranks the config file.
    pub const API_URL: SourceKey = SourceKey {
        field: "api_url",
        candidates: &[
            Candidate::flag("api-url"),
            Candidate::flag("apiurl"),
            Candidate::config("api_url"),
        ],
    };

    /// Calling integration identifier.
    pub const PLUGIN: SourceKey = SourceKey {
        field: "plugin",
        candidates: &[Candidate::flag("plugin")],
    };

    /// Request timeout in seconds.
    pub const TIMEOUT: SourceKey = SourceKey {
        field: "timeout",
        candidates: &[Candidate::flag("timeout"), Candidate::config("timeout")],
    };

    /// Disable TLS certificate verification.
    pub const DISABLE_SSL_VERIFY: SourceKey = SourceKey {
        field: "disable_ssl_verify",
        candidates: &[
            Candidate::flag("no-ssl-verify"),
            Candidate::config("no_ssl_verify"),
        ],
    };

    /// Proxy URL.
    pub const PROXY: SourceKey = SourceKey {
        field: "proxy",
        candidates: &[Candidate::flag("proxy"), Candidate::config("proxy")],
    };

    /// Custom CA bundle path.
    pub const SSL_CERTS_FILE: SourceKey = SourceKey {
        field: "ssl_certs_file",
        candidates: &[
            Candidate::flag("ssl-certs-file"),
            Candidate::config("ssl_certs_file"),
        ],
    };

    /// Offline queue disabled. Config `offline = false` means disabled.
    pub const OFFLINE_DISABLED: SourceKey = SourceKey {
        field: "offline_disabled",
        candidates: &[
            Candidate::flag("disable-offline"),
            Candidate::flag("disableoffline"),
            Candidate::config("offline").negated(),
        ],
    };

    /// Maximum number of queued heartbeats to sync.
    pub const SYNC_OFFLINE_ACTIVITY: SourceKey = SourceKey {
        field: "sync_offline_activity",
        candidates: &[
            Candidate::flag("sync-offline-activity"),
            Candidate::config("sync_offline_activity"),
        ],
    };

    /// Key to print for `--config-read`.
    pub const CONFIG_READ: SourceKey = SourceKey {
        field: "config_read",
        candidates: &[Candidate::flag("config-read")],
    };

    /// Section to read from for `--config-read`.
    pub const CONFIG_SECTION: SourceKey = SourceKey {
        field: "config_section",
        candidates: &[Candidate::flag("config-section")],
    };

    /// Fields resolved into [`Params`](crate::params::Params).
    pub const PARAMS: &[SourceKey] = &[
        API_KEY,
        API_URL,
        PLUGIN,
        TIMEOUT,
        DISABLE_SSL_VERIFY,
        PROXY,
        SSL_CERTS_FILE,
        OFFLINE_DISABLED,
        SYNC_OFFLINE_ACTIVITY,
    ];

    /// Returns true if some field reads `key` from the `[settings]` section.
    #[must_use]
    pub fn is_config_key(key: &str) -> bool {
        PARAMS
            .iter()
            .flat_map(|field| field.candidates)
            .any(|candidate| candidate.origin == Origin::Config && candidate.key == key)
    }
}
