//! Error types for the envmap library.
//!
//! This module provides the error hierarchy for environment resolution,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with an envmap error.
///
/// # Examples
///
/// ```
/// use envmap::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("value".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the envmap library.
///
/// Every failure aborts the entire resolution call in which it occurred;
/// there is no partial configuration and nothing is recoverable
/// internally. Callers typically treat these as fatal configuration
/// errors at process startup.
#[derive(Debug, Error)]
pub enum Error {
    /// A required variable has no entry in the environment source.
    #[error("Environment variable {name} is not set")]
    MissingVariable {
        /// The name of the missing variable.
        name: String,
    },

    /// A parser failed on a non-empty raw value.
    ///
    /// The underlying parser error's display text is embedded verbatim
    /// and is also preserved as [`std::error::Error::source`].
    #[error("Error resolving environment variable {name}, {source}")]
    Resolve {
        /// The name of the variable whose value failed to parse.
        name: String,
        /// The parser error.
        #[source]
        source: ParseError,
    },
}

impl Error {
    /// Check if the error indicates a missing required variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::Error;
    ///
    /// let err = Error::MissingVariable { name: "PORT".to_string() };
    /// assert!(err.is_missing());
    /// ```
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingVariable { .. })
    }

    /// The name of the environment variable the error refers to.
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::Error;
    ///
    /// let err = Error::MissingVariable { name: "PORT".to_string() };
    /// assert_eq!(err.variable(), "PORT");
    /// ```
    #[must_use]
    pub fn variable(&self) -> &str {
        match self {
            Self::MissingVariable { name } | Self::Resolve { name, .. } => name,
        }
    }
}

/// Error raised by a value parser on malformed input.
///
/// Built-in parsers use the dedicated variants; caller-supplied parsers
/// report failures via [`ParseError::custom`]. The resolver never lets a
/// `ParseError` propagate raw: it is always rewrapped as
/// [`Error::Resolve`] with the variable name attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string does not represent a finite number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The string does not represent an integer strictly greater than zero.
    #[error("Invalid positive integer: {0}")]
    InvalidPositiveInteger(String),

    /// The string is neither `"true"` nor `"false"`.
    #[error("Invalid boolean: {0}")]
    InvalidBoolean(String),

    /// A caller-supplied parser rejected the value.
    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    /// Create a custom parse error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::ParseError;
    ///
    /// let err = ParseError::custom("Invalid duration: 5x");
    /// assert_eq!(err.to_string(), "Invalid duration: 5x");
    /// ```
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
