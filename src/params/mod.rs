//! Parameter resolution and validation.
//!
//! Turns a [`SourceSet`](crate::source::SourceSet) into one validated,
//! immutable [`Params`] value:
//!
//! 1. [`resolve`] picks a winning value per field from the precedence table
//!    in [`keys`].
//! 2. [`validate`] checks each winner on its own.
//! 3. [`ParamsBuilder`] assembles the result or returns the first error.
//!
//! # Precedence
//!
//! For each field the first *explicitly set* candidate wins outright:
//!
//! | Field | Highest → lowest |
//! |---|---|
//! | key | `--key`, `settings.api_key`, `settings.apikey` |
//! | url | `--api-url`, `--apiurl`, `settings.api_url` |
//! | plugin | `--plugin` |
//! | timeout | `--timeout`, `settings.timeout` |
//! | `disable_ssl_verify` | `--no-ssl-verify`, `settings.no_ssl_verify` |
//! | proxy | `--proxy`, `settings.proxy` |
//! | `ssl_certs_file` | `--ssl-certs-file`, `settings.ssl_certs_file` |
//! | offline disabled | `--disable-offline`, `--disableoffline`, `!settings.offline` |
//! | sync max | `--sync-offline-activity`, `settings.sync_offline_activity` |
//!
//! The deprecated flags `--apiurl` and `--disableoffline` rank above the
//! config file. Empty strings are never considered set, and flag booleans
//! only count when raised (`true`).
//!
//! # Errors
//!
//! A missing or malformed key is an [`AuthError`]; anything else is a
//! [`ValidationError`] naming the flag or config key at fault.

mod builder;
mod error;
pub mod resolve;
pub mod validate;


pub use builder::{ApiParams, OfflineParams, Params, ParamsBuilder};
pub use error::{AuthError, ParamsError, ValidationError};
pub use resolve::{Candidate, Resolved, SourceKey, keys, resolve};
