#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # envmap
//!
//! A library for resolving process environment variables into a
//! strongly-typed configuration object.
//!
//! Instead of scattering `std::env::var` lookups through a program,
//! callers declare a [`Schema`] once: which variables to read, which are
//! optional, what defaults apply, and how values convert to their target
//! types. Resolution fails loudly and specifically when a required
//! variable is absent or a value fails conversion.
//!
//! ## Core Types
//!
//! - [`Schema`], [`Entry`], [`Modifier`], [`Options`]: the declarative
//!   schema model
//! - [`Resolver`] and [`ResolvedConfig`]: the resolution engine and its
//!   output
//! - [`EnvSource`], [`ProcessEnv`], [`MapSource`]: environment lookup
//! - [`Value`]: resolved values
//! - [`Error`], [`ParseError`], [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use envmap::{parse, Entry, MapSource, Resolver, Schema, Value};
//!
//! let source = MapSource::new()
//!     .with("APP_HOST", "localhost")
//!     .with("APP_PORT", "8080");
//!
//! let schema = Schema::new()
//!     .with("host", Entry::required("APP_HOST"))
//!     .with("port", Entry::parsed("APP_PORT", parse::positive_integer))
//!     .with("log_level", Entry::with_default("APP_LOG_LEVEL", "info"));
//!
//! let config = Resolver::new(source).resolve(&schema).unwrap();
//! assert_eq!(config.get("port"), Some(&Value::Int(8080)));
//! assert_eq!(config.get("log_level"), Some(&Value::Str("info".to_string())));
//! ```
//!
//! Programs resolving against the real process environment can use the
//! [`resolve_all`] convenience, which reads through [`ProcessEnv`].

pub mod error;
pub mod parse;
pub mod resolve;
pub mod schema;
pub mod source;
pub mod value;

// Re-export key types at crate root for convenience
pub use error::{Error, ParseError, Result};
pub use parse::{boolean, num, positive_integer, ParserFn};
pub use resolve::{require_var, resolve_all, var_or, ResolvedConfig, Resolver};
pub use schema::{Entry, Modifier, Options, Schema};
pub use source::{EnvSource, MapSource, ProcessEnv};
pub use value::Value;
