//! Resolution engine.
//!
//! [`Resolver`] walks a [`Schema`] against an [`EnvSource`] and produces
//! a [`ResolvedConfig`], failing fast on the first missing required
//! variable or parser error. The free functions at the bottom are
//! process-environment conveniences over the same engine.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::schema::{Entry, Schema};
use crate::source::{EnvSource, ProcessEnv};
use crate::value::Value;

#[cfg(test)]
mod proptests;

/// Resolves schemas and single variables against an environment source.
///
/// The resolver only reads from its source; calls are independent and
/// re-entrant.
///
/// # Examples
///
/// ```
/// use envmap::{parse, Entry, MapSource, Resolver, Schema, Value};
///
/// let source = MapSource::new()
///     .with("APP_NAME", "demo")
///     .with("APP_PORT", "8080");
///
/// let schema = Schema::new()
///     .with("name", Entry::required("APP_NAME"))
///     .with("port", Entry::parsed("APP_PORT", parse::positive_integer));
///
/// let config = Resolver::new(source).resolve(&schema).unwrap();
/// assert_eq!(config.get("name"), Some(&Value::Str("demo".to_string())));
/// assert_eq!(config.get("port"), Some(&Value::Int(8080)));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    source: S,
}

impl<S: EnvSource> Resolver<S> {
    /// Create a resolver reading from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The environment source this resolver reads from.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resolve every entry of `schema`, in authoring order.
    ///
    /// # Errors
    ///
    /// Fails with the first error encountered: [`Error::MissingVariable`]
    /// for a required variable with no entry in the source, or
    /// [`Error::Resolve`] when a parser rejects a non-empty value. No
    /// partial configuration is returned and no further entries are
    /// processed after a failure.
    pub fn resolve(&self, schema: &Schema) -> Result<ResolvedConfig> {
        debug!("resolving {} environment entries", schema.len());

        let mut values = BTreeMap::new();
        for (key, entry) in schema.iter() {
            let value = self.resolve_entry(entry)?;
            values.insert(key.to_string(), value);
        }

        Ok(ResolvedConfig { values })
    }

    /// Resolve a single entry.
    ///
    /// The presence check tests whether the source has an entry at all;
    /// a required variable set to the empty string passes it. From then
    /// on an empty value counts as absent: the parser is never invoked
    /// on it and the default (if any) applies instead.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn resolve_entry(&self, entry: &Entry) -> Result<Value> {
        let name = entry.name();
        let modifier = entry.modifier();

        let raw = self.source.get(name);
        if modifier.is_required() && raw.is_none() {
            return Err(Error::MissingVariable {
                name: name.to_string(),
            });
        }

        let raw = raw.filter(|value| !value.is_empty());

        match (modifier.parser(), raw) {
            (Some(parser), Some(value)) => parser(&value).map_err(|source| Error::Resolve {
                name: name.to_string(),
                source,
            }),
            (None, Some(value)) => Ok(Value::Str(value)),
            (_, None) => {
                let value = modifier.default_value().unwrap_or(Value::Absent);
                trace!("variable {name} unset or empty, resolved to {value}");
                Ok(value)
            }
        }
    }

    /// Fetch one required, unparsed variable.
    ///
    /// Returns the raw string as stored, which may be empty: like the
    /// schema path, the presence check here tests for an entry, not for
    /// a non-empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVariable`] if the source has no entry for
    /// `name`.
    pub fn require(&self, name: &str) -> Result<String> {
        self.source.get(name).ok_or_else(|| Error::MissingVariable {
            name: name.to_string(),
        })
    }

    /// Fetch a variable, falling back to `default` when it is unset or
    /// empty. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::{MapSource, Resolver};
    ///
    /// let resolver = Resolver::new(MapSource::new().with("A", "set"));
    /// assert_eq!(resolver.get_or("A", "fallback"), "set");
    /// assert_eq!(resolver.get_or("B", "fallback"), "fallback");
    /// ```
    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.source
            .get(name)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// A resolved configuration: output keys mapped to resolved values.
///
/// Serializes transparently as a plain mapping, so it can be dumped with
/// `serde_json` for startup diagnostics.
///
/// # Examples
///
/// ```
/// use envmap::{Entry, MapSource, Resolver, Schema};
///
/// let source = MapSource::new().with("HOST", "localhost");
/// let schema = Schema::new().with("host", Entry::required("HOST"));
/// let config = Resolver::new(source).resolve(&schema).unwrap();
///
/// assert_eq!(
///     serde_json::to_string(&config).unwrap(),
///     r#"{"host":"localhost"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: BTreeMap<String, Value>,
}

impl ResolvedConfig {
    /// Look up a resolved value by output key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether the configuration contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of resolved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the configuration is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolve `schema` against the ambient process environment.
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve_all(schema: &Schema) -> Result<ResolvedConfig> {
    Resolver::new(ProcessEnv).resolve(schema)
}

/// Fetch one required, unparsed process environment variable.
///
/// # Errors
///
/// See [`Resolver::require`].
pub fn require_var(name: &str) -> Result<String> {
    Resolver::new(ProcessEnv).require(name)
}

/// Fetch a process environment variable with a fallback; never fails.
#[must_use]
pub fn var_or(name: &str, default: &str) -> String {
    Resolver::new(ProcessEnv).get_or(name, default)
}
