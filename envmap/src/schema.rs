//! Schema model for declarative environment resolution.
//!
//! A [`Schema`] maps output keys to [`Entry`] values; each entry names an
//! environment variable and carries a [`Modifier`] controlling parsing,
//! optionality, and defaulting. Modifiers are an explicit tagged variant,
//! so the resolver matches exhaustively instead of inspecting shapes at
//! runtime.

use crate::parse::ParserFn;
use crate::value::Value;

/// An ordered mapping from output keys to entries.
///
/// Authoring order is preserved: the resolver walks entries in the order
/// they were added, which determines which failure is reported first.
///
/// # Examples
///
/// ```
/// use envmap::{parse, Entry, Schema};
///
/// let schema = Schema::new()
///     .with("host", Entry::required("APP_HOST"))
///     .with("port", Entry::parsed("APP_PORT", parse::positive_integer))
///     .with("log_level", Entry::with_default("APP_LOG_LEVEL", "info"));
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: Vec<(String, Entry)>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under `key`, returning the schema for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, entry: Entry) -> Self {
        self.entries.push((key.into(), entry));
        self
    }

    /// Add an entry under `key` in place.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) {
        self.entries.push((key.into(), entry));
    }

    /// Iterate entries in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One schema entry: an environment variable name plus its modifier.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    modifier: Modifier,
}

impl Entry {
    /// A required raw-string entry (a bare variable reference).
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::Entry;
    ///
    /// let entry = Entry::required("DATABASE_URL");
    /// assert_eq!(entry.name(), "DATABASE_URL");
    /// ```
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::Required,
        }
    }

    /// A required entry whose value is converted by `parser`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::{parse, Entry};
    ///
    /// let entry = Entry::parsed("MAX_RETRIES", parse::positive_integer);
    /// ```
    pub fn parsed(name: impl Into<String>, parser: ParserFn) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::Parser(parser),
        }
    }

    /// A raw-string entry with a literal default; never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::Entry;
    ///
    /// let entry = Entry::with_default("GREETING", "hello");
    /// ```
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::Shorthand(default.into()),
        }
    }

    /// An entry with explicit [`Options`].
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::{parse, Entry, Options};
    ///
    /// let entry = Entry::with_options(
    ///     "WORKER_COUNT",
    ///     Options::new().parser(parse::positive_integer).default_value(4),
    /// );
    /// ```
    pub fn with_options(name: impl Into<String>, options: Options) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::Options(options),
        }
    }

    /// The environment variable name this entry reads.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's modifier.
    #[must_use]
    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }
}

/// Resolution rules for one entry.
///
/// Three independent axes are in play: required vs. optional vs.
/// defaulted, raw string vs. parsed, and empty-string-as-absent. The
/// variants cover the common shapes directly; [`Modifier::Options`] is
/// the general form.
#[derive(Debug, Clone)]
pub enum Modifier {
    /// Required raw string; the variable must be present.
    Required,
    /// Required, converted by the parser.
    Parser(ParserFn),
    /// Raw string with a literal default; presence is not required.
    Shorthand(String),
    /// Explicit combination of optionality, parser, and default.
    Options(Options),
}

impl Modifier {
    /// The effective parser, if any.
    #[must_use]
    pub fn parser(&self) -> Option<ParserFn> {
        match self {
            Self::Parser(parser) => Some(*parser),
            Self::Options(options) => options.parser,
            Self::Required | Self::Shorthand(_) => None,
        }
    }

    /// The effective default, if any.
    ///
    /// A default of [`Value::Absent`] counts as no default.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        match self {
            Self::Shorthand(default) => Some(Value::Str(default.clone())),
            Self::Options(options) => options
                .default
                .clone()
                .filter(|value| !value.is_absent()),
            Self::Required | Self::Parser(_) => None,
        }
    }

    /// Whether the variable must be present in the environment source.
    ///
    /// Optionality and a usable default each relax the requirement
    /// independently.
    #[must_use]
    pub fn is_required(&self) -> bool {
        match self {
            Self::Required | Self::Parser(_) => true,
            Self::Shorthand(_) => false,
            Self::Options(options) => !options.optional && self.default_value().is_none(),
        }
    }
}

/// Explicit resolution options for an entry.
///
/// # Examples
///
/// ```
/// use envmap::{parse, Options};
///
/// let options = Options::new()
///     .optional()
///     .parser(parse::num);
/// assert!(options.optional);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Do not fail when the variable has no entry in the source.
    pub optional: bool,
    /// Parser applied to a non-empty raw value.
    pub parser: Option<ParserFn>,
    /// Default used when the raw value is unset or empty.
    pub default: Option<Value>,
}

impl Options {
    /// Create options for a required, unparsed, undefaulted entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the entry optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the parser.
    #[must_use]
    pub fn parser(mut self, parser: ParserFn) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}
