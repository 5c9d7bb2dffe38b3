//! Validated parameter set and the builder that assembles it.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::defaults;
use crate::source::SourceSet;

use super::error::ParamsError;
use super::resolve::{Resolved, SourceKey, keys, resolve};
use super::validate;

/// Parameters used to reach the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiParams {
    /// Secret API key (lowercase UUID v4)
    pub key: String,

    /// API base URL
    pub url: String,

    /// Identifier of the calling editor integration
    pub plugin: Option<String>,

    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,

    /// Skip TLS certificate verification
    pub disable_ssl_verify: bool,

    /// Proxy URL or NTLM credentials
    pub proxy_url: Option<String>,

    /// Custom CA bundle
    pub ssl_cert_filepath: Option<PathBuf>,
}

/// Parameters for the offline heartbeat queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfflineParams {
    /// Do not buffer heartbeats locally when the API is unreachable
    pub disabled: bool,

    /// Maximum number of buffered heartbeats to send per run. Zero syncs nothing.
    pub sync_max: u32,
}

/// Fully resolved and validated parameters.
///
/// Immutable once built; every command that talks to the API receives one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// API connection parameters
    pub api: ApiParams,

    /// Offline queue parameters
    pub offline: OfflineParams,
}

impl Params {
    /// Resolves and validates parameters from `sources`.
    ///
    /// Shorthand for `ParamsBuilder::new(sources).build()`.
    ///
    /// # Errors
    ///
    /// See [`ParamsBuilder::build`].
    pub fn load<S: SourceSet + ?Sized>(sources: &S) -> Result<Self, ParamsError> {
        ParamsBuilder::new(sources).build()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout_str = self
            .api
            .timeout
            .map_or_else(|| "default".to_string(), |t| format!("{}s", t.as_secs()));

        write!(
            f,
            "Params {{ key: {}, url: {}, plugin: {}, timeout: {}, no_ssl_verify: {}, \
             proxy: {}, ssl_certs_file: {}, offline_disabled: {}, sync_offline_activity: {} }}",
            mask_key(&self.api.key),
            self.api.url,
            self.api.plugin.as_deref().unwrap_or("none"),
            timeout_str,
            self.api.disable_ssl_verify,
            if self.api.proxy_url.is_some() { "set" } else { "none" },
            self.api
                .ssl_cert_filepath
                .as_ref()
                .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
            self.offline.disabled,
            self.offline.sync_max,
        )
    }
}

/// Hides all but the last four characters of the key.
fn mask_key(key: &str) -> String {
    let visible = key.len().saturating_sub(4);
    key.get(visible..)
        .map_or_else(|| "****".to_string(), |tail| format!("****{tail}"))
}

/// Resolves and validates every logical field in one pass.
///
/// The builder borrows the source set and holds no other state, so calling
/// [`build`](Self::build) repeatedly on unchanged sources yields equal
/// results.
#[derive(Debug)]
pub struct ParamsBuilder<'a, S: ?Sized> {
    sources: &'a S,
}

impl<'a, S: SourceSet + ?Sized> ParamsBuilder<'a, S> {
    /// Creates a builder over `sources`.
    #[must_use]
    pub const fn new(sources: &'a S) -> Self {
        Self { sources }
    }

    /// Resolves and validates all fields.
    ///
    /// Each field is validated on its own; the first field that fails aborts
    /// the build with that field's error.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Auth`] if the key is missing or malformed, and
    /// [`ParamsError::Validation`] for any other malformed field.
    pub fn build(&self) -> Result<Params, ParamsError> {
        let api = self.build_api()?;
        let offline = self.build_offline()?;

        Ok(Params { api, offline })
    }

    fn build_api(&self) -> Result<ApiParams, ParamsError> {
        let key = self.resolve_value(&keys::API_KEY).map(|r| r.value.as_string());
        let key = validate::api_key(key.as_deref())?;

        let url = match self.resolve_value(&keys::API_URL) {
            Some(r) => validate::api_url(&r.value.as_string(), r.candidate)?,
            None => defaults::API_URL.to_string(),
        };

        let timeout = self
            .resolve_value(&keys::TIMEOUT)
            .map(|r| validate::timeout(r.value, r.candidate))
            .transpose()?;

        let proxy_url = self
            .resolve_value(&keys::PROXY)
            .map(|r| validate::proxy_url(&r.value.as_string(), r.candidate))
            .transpose()?;

        Ok(ApiParams {
            key,
            url,
            plugin: self.resolve_value(&keys::PLUGIN).map(|r| r.value.as_string()),
            timeout,
            disable_ssl_verify: self.resolve_switch(&keys::DISABLE_SSL_VERIFY)?,
            proxy_url,
            ssl_cert_filepath: self
                .resolve_value(&keys::SSL_CERTS_FILE)
                .map(|r| PathBuf::from(r.value.as_string())),
        })
    }

    fn build_offline(&self) -> Result<OfflineParams, ParamsError> {
        let disabled = self.resolve_switch(&keys::OFFLINE_DISABLED)?;

        let sync_max = match self.resolve_value(&keys::SYNC_OFFLINE_ACTIVITY) {
            Some(r) => validate::sync_max(r.value, r.candidate)?,
            None => defaults::SYNC_OFFLINE_ACTIVITY,
        };

        Ok(OfflineParams { disabled, sync_max })
    }

    /// Returns the winning value, explicit or library default.
    fn resolve_value(&self, key: &SourceKey) -> Option<Resolved<'a>> {
        resolve(self.sources, key).value()
    }

    /// Resolves a boolean field; `false` when no candidate has a value.
    fn resolve_switch(&self, key: &SourceKey) -> Result<bool, ParamsError> {
        self.resolve_value(key)
            .map_or(Ok(false), |resolved| validate::switch(&resolved))
            .map_err(ParamsError::from)
    }
}
