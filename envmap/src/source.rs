//! Environment sources.
//!
//! The resolver reads variables through the [`EnvSource`] abstraction
//! rather than touching process globals directly. [`ProcessEnv`] is the
//! production implementation; [`MapSource`] is an in-memory store for
//! deterministic tests and embedding.

use std::collections::BTreeMap;
use std::env;

/// Read-only lookup of environment variables by name.
///
/// `None` means the source has no entry at all for the name; `Some("")`
/// means the variable is present but empty. The resolver relies on this
/// distinction: presence checks test for an entry, while parser and
/// default handling treat an empty value as absent.
pub trait EnvSource {
    /// Look up the value of `name`, if the source has an entry for it.
    fn get(&self, name: &str) -> Option<String>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// The ambient process environment.
///
/// Each lookup reads the live process environment at call time; nothing
/// is snapshotted or cached. Variables whose values are not valid UTF-8
/// are reported as unset.
///
/// # Examples
///
/// ```
/// use envmap::{EnvSource, ProcessEnv};
///
/// let path = ProcessEnv.get("PATH");
/// # let _ = path;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// An in-memory environment source.
///
/// Useful for tests (no process-global state to set up or restore) and
/// for callers that want to resolve a schema against values they control.
///
/// # Examples
///
/// ```
/// use envmap::{EnvSource, MapSource};
///
/// let source = MapSource::new()
///     .with("HOST", "localhost")
///     .with("EMPTY", "");
///
/// assert_eq!(source.get("HOST").as_deref(), Some("localhost"));
/// assert_eq!(source.get("EMPTY").as_deref(), Some(""));
/// assert_eq!(source.get("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: BTreeMap<String, String>,
}

impl MapSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, returning the source for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set a variable in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable, so lookups report it as unset.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl EnvSource for MapSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
