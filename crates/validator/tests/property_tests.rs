//! Property-based tests for stencil-validator.

use proptest::prelude::*;
use stencil_validator::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        ".{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
            prop::collection::vec(("[a-c]", inner), 0..4).prop_map(Value::mapping),
        ]
    })
}

fn shape() -> Validator {
    mapping! {
        "a" => string().max_length(4),
        "b" => Validator::sequence(integer().min_value(0)),
        "c" => tuple![boolean(), number().optional()].unwrap(),
    }
    .unwrap()
}

fn conforming() -> impl Strategy<Value = Value> {
    (
        "[a-z]{1,4}",
        prop::collection::vec(0..1000i64, 0..5),
        any::<bool>(),
        prop::option::of(-10.0..10.0f64),
    )
        .prop_map(|(a, b, flag, n)| {
            Value::mapping([
                ("a", Value::from(a)),
                ("b", Value::from(b)),
                ("c", Value::tuple([Value::from(flag), Value::from(n)])),
            ])
        })
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(value in arb_value()) {
        let validator = shape();
        let first = validate(&value, &validator);
        let second = validate(&value, &validator);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn conforming_values_have_no_problems(value in conforming()) {
        prop_assert!(validate(&value, &shape()).is_none());
    }
}

// ============================================================================
// SHAPE: problems only where validators are
// ============================================================================

proptest! {
    #[test]
    fn problems_only_under_declared_keys(value in arb_value()) {
        if let Some(Problem::Keyed(keys)) = validate(&value, &shape()) {
            for key in keys.keys() {
                prop_assert!(["a", "b", "c"].contains(&key.as_str()));
            }
        }
    }

    #[test]
    fn sequence_problems_index_real_elements(items in prop::collection::vec(any::<i64>(), 0..10)) {
        let validator = Validator::sequence(integer().min_value(0));
        let value = Value::from(items.clone());
        let failing: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, n)| **n < 0)
            .map(|(i, _)| i)
            .collect();

        match validate(&value, &validator) {
            None => prop_assert!(failing.is_empty()),
            Some(Problem::Indexed(problems)) => {
                let indices: Vec<usize> = problems.keys().copied().collect();
                prop_assert_eq!(indices, failing);
            }
            Some(other) => prop_assert!(false, "unexpected problem shape: {other}"),
        }
    }

    #[test]
    fn extra_keys_never_matter(value in conforming(), extra in ".{0,8}") {
        let mut with_extra = value.as_mapping().cloned().unwrap_or_default();
        with_extra.insert("zz_extra".to_owned(), Value::from(extra));
        prop_assert_eq!(
            validate(&Value::Mapping(with_extra), &shape()),
            validate(&value, &shape())
        );
    }
}
