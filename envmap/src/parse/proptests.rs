//! Property-based tests for the built-in parsers.

use proptest::prelude::*;

use super::{boolean, num, positive_integer};
use crate::value::Value;

proptest! {
    // Every finite f64 display form must round-trip through num.
    #[test]
    fn prop_num_roundtrips_finite_floats(n in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let parsed = num(&n.to_string()).unwrap();
        prop_assert_eq!(parsed, Value::Num(n));
    }

    // Alphabetic strings either fail to parse or parse non-finite; num
    // rejects both.
    #[test]
    fn prop_num_rejects_non_numeric(s in "[a-zA-Z_]{1,12}") {
        prop_assert!(num(&s).is_err());
    }

    // positive_integer accepts exactly the integers >= 1.
    #[test]
    fn prop_positive_integer_accepts_positives(n in 1i64..=1_000_000_000) {
        let parsed = positive_integer(&n.to_string()).unwrap();
        prop_assert_eq!(parsed, Value::Int(n));
    }

    #[test]
    fn prop_positive_integer_rejects_non_positives(n in i64::MIN..=0) {
        prop_assert!(positive_integer(&n.to_string()).is_err());
    }

    #[test]
    fn prop_positive_integer_rejects_fractionals(whole in 0i64..=1_000_000, frac in 1u32..=999) {
        let input = format!("{whole}.{frac:03}");
        prop_assert!(positive_integer(&input).is_err());
    }

    // boolean rejects everything but the two exact literals.
    #[test]
    fn prop_boolean_rejects_non_literals(s in "[a-zA-Z01]{1,8}") {
        prop_assume!(s != "true" && s != "false");
        prop_assert!(boolean(&s).is_err());
    }

    #[test]
    fn prop_boolean_roundtrips(b in any::<bool>()) {
        let parsed = boolean(&b.to_string()).unwrap();
        prop_assert_eq!(parsed, Value::Bool(b));
    }
}
