//! Property-based tests for the resolution engine.

use proptest::prelude::*;

use super::Resolver;
use crate::schema::{Entry, Options, Schema};
use crate::source::MapSource;
use crate::value::Value;

// Variable values that are non-empty and survive the raw-string path
// unchanged.
fn raw_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:-]{1,24}"
}

proptest! {
    // A present, non-empty value always wins over a default.
    #[test]
    fn prop_default_never_overrides_present_value(
        raw in raw_value_strategy(),
        default in raw_value_strategy(),
    ) {
        let source = MapSource::new().with("VAR", raw.clone());
        let schema = Schema::new().with(
            "key",
            Entry::with_options("VAR", Options::new().default_value(default)),
        );

        let config = Resolver::new(source).resolve(&schema).unwrap();
        prop_assert_eq!(config.get("key"), Some(&Value::Str(raw)));
    }

    // A required entry with no source entry always fails, naming the
    // variable.
    #[test]
    fn prop_required_unset_always_fails(name in "[A-Z][A-Z0-9_]{0,20}") {
        let schema = Schema::new().with("key", Entry::required(name.clone()));

        let err = Resolver::new(MapSource::new()).resolve(&schema).unwrap_err();
        prop_assert_eq!(err.variable(), name.as_str());
        prop_assert!(err.to_string().contains("is not set"));
    }

    // An optional entry with no source entry always resolves to Absent.
    #[test]
    fn prop_optional_unset_resolves_absent(name in "[A-Z][A-Z0-9_]{0,20}") {
        let schema = Schema::new().with(
            "key",
            Entry::with_options(name, Options::new().optional()),
        );

        let config = Resolver::new(MapSource::new()).resolve(&schema).unwrap();
        prop_assert_eq!(config.get("key"), Some(&Value::Absent));
    }

    // Bare references over set, non-empty variables resolve to exactly
    // the raw values.
    #[test]
    fn prop_bare_references_identity(values in proptest::collection::btree_map(
        "[A-Z][A-Z0-9_]{0,12}",
        raw_value_strategy(),
        1..8,
    )) {
        let mut schema = Schema::new();
        let mut source = MapSource::new();
        for (name, value) in &values {
            source.set(name.clone(), value.clone());
            schema.insert(name.to_lowercase(), Entry::required(name.clone()));
        }

        let config = Resolver::new(source).resolve(&schema).unwrap();
        prop_assert_eq!(config.len(), values.len());
        for (name, value) in &values {
            prop_assert_eq!(
                config.get(&name.to_lowercase()),
                Some(&Value::Str(value.clone()))
            );
        }
    }
}
