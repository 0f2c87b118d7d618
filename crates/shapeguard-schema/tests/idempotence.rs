//! Property tests: validation is deterministic, a successful validation
//! returns its input, and re-validating a result yields the same result.

use proptest::prelude::*;
use shapeguard_core::{Map, Value};
use shapeguard_schema::{
    array, boolean, intersection, literal, null, number, object, string, union, unknown, Schema,
};

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::from),
        "[a-c]{0,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

fn any_schema() -> impl Strategy<Value = Schema> {
    let leaf = prop_oneof![
        Just(string()),
        Just(number()),
        Just(boolean()),
        Just(null()),
        Just(unknown()),
        "[a-c]{0,2}".prop_map(|s: String| literal(s)),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(array),
            prop::collection::vec(("[a-d]", inner.clone()), 0..3)
                .prop_map(|fields| object(fields)),
            prop::collection::vec(inner.clone(), 1..3).prop_map(|members| union(members)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| intersection(a, b)),
            inner.clone().prop_map(|s| s.optional()),
        ]
    })
}

/// A schema accepting exactly the structure of `value`.
fn schema_for(value: &Value) -> Schema {
    match value {
        Value::Undefined => Schema::Undefined,
        Value::Null => null(),
        Value::Bool(_) => boolean(),
        Value::Number(_) => number(),
        Value::String(_) => string(),
        Value::Array(items) => match items.first() {
            Some(first)
                if first.kind().is_primitive()
                    && items.iter().all(|i| i.kind() == first.kind()) =>
            {
                array(schema_for(first))
            }
            _ => array(unknown()),
        },
        Value::Object(map) => object(
            map.iter()
                .map(|(k, v)| (k.clone(), schema_for(v)))
                .collect::<Vec<_>>(),
        ),
    }
}

proptest! {
    /// A schema derived from a value accepts that value unchanged.
    #[test]
    fn derived_schema_accepts_value(value in json_value()) {
        let schema = schema_for(&value);
        prop_assert_eq!(schema.validate(&value), Ok(value.clone()));
    }

    /// Any accepted value comes back equal and re-validates to itself.
    #[test]
    fn validation_is_idempotent(schema in any_schema(), value in json_value()) {
        if let Ok(out) = schema.validate(&value) {
            prop_assert_eq!(&out, &value);
            prop_assert_eq!(schema.validate(&out), Ok(out.clone()));
        }
    }

    /// Two calls on the same input produce the same outcome.
    #[test]
    fn validation_is_deterministic(schema in any_schema(), value in json_value()) {
        let first = schema.validate(&value).map_err(|e| e.to_string());
        let second = schema.validate(&value).map_err(|e| e.to_string());
        prop_assert_eq!(first, second);
    }

    /// `check` agrees with `validate`.
    #[test]
    fn check_matches_validate(schema in any_schema(), value in json_value()) {
        prop_assert_eq!(schema.check(&value), schema.validate(&value).is_ok());
    }

    /// Objects with an undeclared key always fail with that key listed.
    #[test]
    fn undeclared_key_rejected(fields in prop::collection::btree_map("[a-d]", json_value(), 0..4)) {
        let mut input: Map = fields;
        input.insert("zz".to_owned(), Value::Null);
        let declared: Vec<(String, Schema)> = input
            .keys()
            .filter(|k| k.as_str() != "zz")
            .map(|k| (k.clone(), unknown()))
            .collect();
        let err = object(declared).validate(&Value::Object(input)).unwrap_err();
        prop_assert!(err.to_string().contains(r#""zz""#));
    }
}
