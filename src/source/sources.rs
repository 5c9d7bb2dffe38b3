//! In-memory [`SourceSet`] implementation.

use std::collections::BTreeMap;

use super::{Lookup, Origin, SourceSet, Value};

/// Explicit and default values for one origin.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Layer {
    set: BTreeMap<String, Value>,
    defaults: BTreeMap<String, Value>,
}

/// Materialized configuration sources.
///
/// Each [`Origin`] keeps explicitly set values separate from library
/// defaults. An explicit value always shadows a default for the same key.
///
/// # Example
///
/// ```
/// use waka_params::source::{Lookup, Origin, SourceSet, Sources, Value};
///
/// let sources = Sources::new()
///     .with_set(Origin::Flag, "timeout", 30_i64)
///     .with_default(Origin::Flag, "sync-offline-activity", 100_i64);
///
/// assert!(sources.is_set(Origin::Flag, "timeout"));
/// assert_eq!(
///     sources.lookup(Origin::Flag, "sync-offline-activity"),
///     Lookup::Default(&Value::Int(100)),
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sources {
    flags: Layer,
    config: Layer,
}

impl Sources {
    /// Creates an empty source set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an explicitly set value.
    pub fn set(&mut self, origin: Origin, key: impl Into<String>, value: impl Into<Value>) {
        self.layer_mut(origin).set.insert(key.into(), value.into());
    }

    /// Records a library default.
    pub fn set_default(&mut self, origin: Origin, key: impl Into<String>, value: impl Into<Value>) {
        self.layer_mut(origin)
            .defaults
            .insert(key.into(), value.into());
    }

    /// Builder form of [`Sources::set`].
    #[must_use]
    pub fn with_set(
        mut self,
        origin: Origin,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.set(origin, key, value);
        self
    }

    /// Builder form of [`Sources::set_default`].
    #[must_use]
    pub fn with_default(
        mut self,
        origin: Origin,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.set_default(origin, key, value);
        self
    }

    const fn layer(&self, origin: Origin) -> &Layer {
        match origin {
            Origin::Flag => &self.flags,
            Origin::Config => &self.config,
        }
    }

    const fn layer_mut(&mut self, origin: Origin) -> &mut Layer {
        match origin {
            Origin::Flag => &mut self.flags,
            Origin::Config => &mut self.config,
        }
    }
}

impl SourceSet for Sources {
    fn lookup(&self, origin: Origin, key: &str) -> Lookup<&Value> {
        let layer = self.layer(origin);

        if let Some(value) = layer.set.get(key) {
            return Lookup::Set(value);
        }

        layer
            .defaults
            .get(key)
            .map_or(Lookup::Absent, Lookup::Default)
    }
}
