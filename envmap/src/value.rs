//! Resolved value representation.
//!
//! Environment variables are strings; a schema entry with a parser
//! converts the string into one of the typed forms here. [`Value`] is the
//! common currency between parsers, defaults, and the resolved
//! configuration.

use std::fmt;

use serde::Serialize;

/// A resolved environment value.
///
/// Produced by the resolver for every schema entry: a raw string for
/// unparsed entries, a typed variant for parsed ones, and [`Value::Absent`]
/// for an optional or defaulted entry whose variable was unset (or empty)
/// with no default to fall back to.
///
/// Serializes untagged, so a resolved configuration dumps as plain JSON
/// values (`Absent` becomes `null`).
///
/// # Examples
///
/// ```
/// use envmap::Value;
///
/// let port = Value::Int(8080);
/// assert_eq!(port.as_int(), Some(8080));
/// assert!(!port.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A raw or defaulted string.
    Str(String),
    /// A number, possibly fractional.
    Num(f64),
    /// An integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
    /// No value: the variable was unset (or empty) and no default applied.
    Absent,
}

impl Value {
    /// The string contents, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric contents, if this is a number.
    ///
    /// Integer values are widened to `f64` as well.
    #[must_use]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// The integer contents, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean contents, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this is [`Value::Absent`].
    ///
    /// # Examples
    ///
    /// ```
    /// use envmap::Value;
    ///
    /// assert!(Value::Absent.is_absent());
    /// assert!(!Value::Bool(false).is_absent());
    /// ```
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Absent => write!(f, "<absent>"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variants() {
        assert_eq!(Value::Str("a".to_string()).as_str(), Some("a"));
        assert_eq!(Value::Num(3.5).as_num(), Some(3.5));
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));

        assert_eq!(Value::Int(7).as_str(), None);
        assert_eq!(Value::Str("a".to_string()).as_bool(), None);
    }

    #[test]
    fn test_as_num_widens_integers() {
        assert_eq!(Value::Int(42).as_num(), Some(42.0));
    }

    #[test]
    fn test_is_absent() {
        assert!(Value::Absent.is_absent());
        assert!(!Value::Str(String::new()).is_absent());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Str("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Num(-3.14).to_string(), "-3.14");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Absent.to_string(), "<absent>");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("x"), Value::Str("x".to_string()));
        assert_eq!(Value::from(3000), Value::Int(3000));
        assert_eq!(Value::from(2.5), Value::Num(2.5));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(Value::Str("a".to_string())).unwrap(),
            serde_json::json!("a")
        );
        assert_eq!(
            serde_json::to_value(Value::Int(42)).unwrap(),
            serde_json::json!(42)
        );
        assert_eq!(
            serde_json::to_value(Value::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
        assert_eq!(
            serde_json::to_value(Value::Absent).unwrap(),
            serde_json::Value::Null
        );
    }
}
