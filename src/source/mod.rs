//! Configuration source abstraction.
//!
//! A [`SourceSet`] answers typed lookups for `(origin, key)` pairs and, more
//! importantly, tells callers whether a value was *explicitly set* or only
//! carries a built-in default. That distinction is modeled as the tri-state
//! [`Lookup`] instead of being inferred from zero values, so an explicit
//! `0`, `false` or `"none"` never gets confused with "nothing was given".
//!
//! The production implementation is [`Sources`], populated from parsed CLI
//! flags and the `[settings]` section of the config file.

mod sources;
mod value;

#[cfg(test)]
mod mod_tests;

use std::fmt;

pub use sources::Sources;
pub use value::Value;

/// Where a configuration value was defined.
///
/// Deprecated flag aliases are ordinary [`Origin::Flag`] keys with their
/// older names; the same holds for deprecated config keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// A command-line flag.
    Flag,
    /// A key in the `[settings]` section of the config file.
    Config,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("flag"),
            Self::Config => f.write_str("config"),
        }
    }
}

/// Result of looking a key up in a source.
///
/// `Set` wins over `Default` wherever precedence is decided; `Absent` means
/// the origin knows nothing about the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Explicitly provided by the caller (flag passed, key present in file).
    Set(T),
    /// Only a library-level default is available.
    Default(T),
    /// Not defined at all.
    Absent,
}

impl<T> Lookup<T> {
    /// Returns true for [`Lookup::Set`].
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the carried value regardless of whether it was set or defaulted.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Set(v) | Self::Default(v) => Some(v),
            Self::Absent => None,
        }
    }
}

/// Read-only view over every configuration origin.
///
/// Only [`SourceSet::lookup`] must be implemented; the typed getters coerce
/// whatever value is visible, explicit or default, the way a loosely typed
/// key/value store would.
pub trait SourceSet {
    /// Looks up `key` in `origin`.
    fn lookup(&self, origin: Origin, key: &str) -> Lookup<&Value>;

    /// Returns true if `key` was explicitly set in `origin`.
    fn is_set(&self, origin: Origin, key: &str) -> bool {
        self.lookup(origin, key).is_set()
    }

    /// Returns the value rendered as a string.
    fn string(&self, origin: Origin, key: &str) -> Option<String> {
        self.lookup(origin, key).value().map(Value::as_string)
    }

    /// Returns the value coerced to an integer, if it is one.
    fn int(&self, origin: Origin, key: &str) -> Option<i64> {
        self.lookup(origin, key).value().and_then(Value::as_int)
    }

    /// Returns the value coerced to a boolean, if it is one.
    fn bool(&self, origin: Origin, key: &str) -> Option<bool> {
        self.lookup(origin, key).value().and_then(Value::as_bool)
    }
}

impl<S: SourceSet + ?Sized> SourceSet for &S {
    fn lookup(&self, origin: Origin, key: &str) -> Lookup<&Value> {
        (**self).lookup(origin, key)
    }
}
