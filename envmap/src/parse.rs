//! Built-in value parsers.
//!
//! Each parser is a pure `&str -> Result<Value, ParseError>` function,
//! usable standalone or as the parser of a schema entry. Caller-supplied
//! parsers use the same [`ParserFn`] signature and report failures via
//! [`ParseError::custom`].

use crate::error::ParseError;
use crate::value::Value;

#[cfg(test)]
mod proptests;

/// Signature shared by built-in and caller-supplied value parsers.
///
/// # Examples
///
/// ```
/// use envmap::{ParseError, ParserFn, Value};
///
/// fn duration_secs(value: &str) -> Result<Value, ParseError> {
///     value
///         .strip_suffix('s')
///         .and_then(|n| n.parse::<i64>().ok())
///         .map(Value::Int)
///         .ok_or_else(|| ParseError::custom(format!("Invalid duration: {value}")))
/// }
///
/// let parser: ParserFn = duration_secs;
/// assert_eq!(parser("30s").unwrap(), Value::Int(30));
/// ```
pub type ParserFn = fn(&str) -> std::result::Result<Value, ParseError>;

/// Parse a string as a finite number.
///
/// Accepts signed integers and decimals (`"42"`, `"-3.14"`). NaN and
/// infinities are rejected.
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] if the string does not
/// represent a finite number.
///
/// # Examples
///
/// ```
/// use envmap::{parse, Value};
///
/// assert_eq!(parse::num("42").unwrap(), Value::Num(42.0));
/// assert_eq!(parse::num("-3.14").unwrap(), Value::Num(-3.14));
/// assert!(parse::num("not_a_number").is_err());
/// ```
pub fn num(value: &str) -> std::result::Result<Value, ParseError> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Num(n)),
        _ => Err(ParseError::InvalidNumber(value.to_string())),
    }
}

/// Parse a string as an integer strictly greater than zero.
///
/// The string is converted to a number first, so `"42.353"` fails as
/// non-integral rather than as malformed input.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPositiveInteger`] if the value is
/// non-numeric, non-integral, zero, or negative.
///
/// # Examples
///
/// ```
/// use envmap::{parse, Value};
///
/// assert_eq!(parse::positive_integer("42").unwrap(), Value::Int(42));
/// assert!(parse::positive_integer("42.353").is_err());
/// assert!(parse::positive_integer("-42").is_err());
/// assert!(parse::positive_integer("0").is_err());
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn positive_integer(value: &str) -> std::result::Result<Value, ParseError> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= 1.0 && n < i64::MAX as f64 => {
            Ok(Value::Int(n as i64))
        }
        _ => Err(ParseError::InvalidPositiveInteger(value.to_string())),
    }
}

/// Parse a string as a boolean.
///
/// Recognizes exactly `"true"` and `"false"`, case-sensitive. There is no
/// truthy/falsy coercion: `"1"`, `"yes"`, and `"0"` all fail.
///
/// # Errors
///
/// Returns [`ParseError::InvalidBoolean`] for any other string.
///
/// # Examples
///
/// ```
/// use envmap::{parse, Value};
///
/// assert_eq!(parse::boolean("true").unwrap(), Value::Bool(true));
/// assert_eq!(parse::boolean("false").unwrap(), Value::Bool(false));
/// assert!(parse::boolean("TRUE").is_err());
/// assert!(parse::boolean("1").is_err());
/// ```
pub fn boolean(value: &str) -> std::result::Result<Value, ParseError> {
    match value {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => Err(ParseError::InvalidBoolean(value.to_string())),
    }
}
