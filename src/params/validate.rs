//! Per-field validators.
//!
//! Each validator checks one resolved value and stops at the first violated
//! constraint. Errors carry the [`Candidate`] the value came from so the
//! message names the flag or config key to fix.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::source::Value;

use super::error::{AuthError, ValidationError};
use super::resolve::{Candidate, Resolved};

/// Canonical UUID v4 in lowercase hex.
static API_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}$")
        .expect("api key pattern is valid")
});

/// `domain\user:password`, one or two backslashes, no scheme.
static NTLM_PROXY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\\/:@\s]+\\{1,2}[^\\/:@\s]+:.+$").expect("ntlm proxy pattern is valid")
});

/// Schemes accepted for proxy URLs.
pub const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5"];

/// Schemes accepted for the API URL.
pub const API_URL_SCHEMES: &[&str] = &["http", "https"];

/// Validates the secret API key.
///
/// # Errors
///
/// Returns [`AuthError`] if the key is missing or not a lowercase UUID v4.
pub fn api_key(key: Option<&str>) -> Result<String, AuthError> {
    let Some(key) = key else {
        return Err(AuthError::new("failed to load api key"));
    };

    if !API_KEY_PATTERN.is_match(key) {
        return Err(AuthError::new("api key invalid"));
    }

    Ok(key.to_string())
}

/// Validates the API base URL.
///
/// Values without a scheme (`localhost:8080/api`) are passed through
/// untouched. A value that names a scheme must be an http(s) URL with a host.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidApiUrl`] for a non-http(s) scheme or a
/// missing host.
pub fn api_url(value: &str, source: Candidate) -> Result<String, ValidationError> {
    if !value.contains("://") {
        return Ok(value.to_string());
    }

    let invalid = |reason: String| ValidationError::InvalidApiUrl {
        value: value.to_string(),
        source_name: source,
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;

    if !API_URL_SCHEMES.contains(&url.scheme()) {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(value.to_string())
}

/// Validates a proxy URL.
///
/// NTLM credentials (`domain\user:password`) are accepted verbatim. Anything
/// else must be a URL with an `http`, `https` or `socks5` scheme.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidProxy`] for any other form.
pub fn proxy_url(value: &str, source: Candidate) -> Result<String, ValidationError> {
    if NTLM_PROXY_PATTERN.is_match(value) {
        return Ok(value.to_string());
    }

    let invalid = |reason: String| ValidationError::InvalidProxy {
        value: value.to_string(),
        source_name: source,
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;

    if !PROXY_SCHEMES.contains(&url.scheme()) {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(value.to_string())
}

/// Converts a timeout in seconds to a [`Duration`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimeout`] for negative or non-numeric values.
pub fn timeout(value: &Value, source: Candidate) -> Result<Duration, ValidationError> {
    value
        .as_int()
        .and_then(|secs| u64::try_from(secs).ok())
        .map(Duration::from_secs)
        .ok_or_else(|| ValidationError::InvalidTimeout {
            value: value.to_string(),
            source_name: source,
        })
}

/// Parses the maximum number of offline heartbeats to sync.
///
/// The literal `"none"` means zero.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidSyncMax`] for negative or non-numeric values.
pub fn sync_max(value: &Value, source: Candidate) -> Result<u32, ValidationError> {
    if let Value::Str(s) = value {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(0);
        }
    }

    value
        .as_int()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ValidationError::InvalidSyncMax {
            value: value.to_string(),
            source_name: source,
        })
}

/// Coerces a resolved switch to a boolean, honoring negated candidates.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBool`] if the value is not a boolean.
pub fn switch(resolved: &Resolved<'_>) -> Result<bool, ValidationError> {
    resolved
        .as_bool()
        .ok_or_else(|| ValidationError::InvalidBool {
            value: resolved.value.to_string(),
            source_name: resolved.candidate,
        })
}
