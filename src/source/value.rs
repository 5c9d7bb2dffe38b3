//! Loosely typed scalar values shared by all origins.

use std::fmt;

/// A scalar configuration value.
///
/// Flags arrive as strings or switches, config file entries keep their TOML
/// type. Coercions follow the permissive rules of a key/value store: a
/// string `"42"` is a valid integer and `"on"` is a valid boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
}

impl Value {
    /// Returns true for a string that is empty after trimming.
    ///
    /// Blank strings count as "not set" during resolution.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Str(s) if s.trim().is_empty())
    }

    /// Renders the value as text.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Returns the value as an integer.
    ///
    /// Strings are trimmed and parsed as base-10; booleans are not integers.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Returns the value as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(n) => Some(*n != 0),
            Self::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" => Some(false),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
