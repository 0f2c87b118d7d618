//! Integration tests: the observable contract of every node variant,
//! exercised through the public builder API only.

use serde_json::json;
use shapeguard_core::{PathSegment, Value};
use shapeguard_schema::{
    array, boolean, intersection, literal, null, number, object, object_with, string, undefined,
    union, union_with, unknown, Failure, ObjectOptions, Schema, UnionOptions, ValidateOptions,
};

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// One sample value per kind, paired with the leaf that accepts it.
fn kind_samples() -> Vec<(Schema, Value)> {
    vec![
        (string(), v(json!("text"))),
        (number(), v(json!(42))),
        (boolean(), v(json!(true))),
        (null(), v(json!(null))),
        (undefined(), Value::Undefined),
    ]
}

#[test]
fn test_leaf_accepts_iff_kind_matches() {
    let mut observed = kind_samples();
    observed.push((array(unknown()), v(json!([1]))));
    observed.push((object([("k", unknown())]), v(json!({"k": 1}))));

    for (leaf, accepted) in kind_samples() {
        for (_, candidate) in &observed {
            let result = leaf.validate(candidate);
            if candidate.kind() == accepted.kind() {
                assert_eq!(result.unwrap(), *candidate);
            } else {
                let err = result.unwrap_err();
                assert_eq!(
                    err.to_string(),
                    format!(
                        "expected type to be {} but got {}",
                        accepted.kind(),
                        candidate.kind()
                    )
                );
            }
        }
    }
}

#[test]
fn test_literal_has_no_coercion() {
    assert_eq!(literal(5).validate(&v(json!(5))).unwrap(), v(json!(5)));
    assert!(literal(5).validate(&v(json!("5"))).is_err());
    assert!(literal("true").validate(&v(json!(true))).is_err());
    assert!(literal(true).check(&v(json!(true))));
}

#[test]
fn test_literal_null_and_undefined_are_distinct() {
    let null_literal = literal(Value::Null);
    assert!(null_literal.check(&Value::Null));
    let err = null_literal.validate(&Value::Undefined).unwrap_err();
    assert_eq!(err.to_string(), "expected value to be literal null but got undefined");
}

#[test]
fn test_object_accepts_declared_shape() {
    let schema = object([("a", string())]);
    assert_eq!(schema.validate(&v(json!({"a": "x"}))).unwrap(), v(json!({"a": "x"})));
}

#[test]
fn test_object_lists_unexpected_keys() {
    let schema = object([("a", string())]);
    let input = v(json!({"a": "x", "b": 1}));

    let err = schema.validate(&input).unwrap_err();
    assert!(err.to_string().contains(r#"["b"]"#), "{err}");
    assert!(matches!(err.failure(), Failure::UnexpectedKeys(keys) if keys == &["b"]));

    let opts = ValidateOptions::new().with_allow_unknown(true);
    let out = schema.validate_with(&input, &opts).unwrap();
    assert_eq!(out.get("b"), Some(&v(json!(1))));
    assert_eq!(out, input);
}

#[test]
fn test_array_of_numbers() {
    let schema = array(number());
    assert_eq!(schema.validate(&v(json!([1, 2, 3]))).unwrap(), v(json!([1, 2, 3])));

    let err = schema.validate(&v(json!([1, "x"]))).unwrap_err();
    assert_eq!(err.path().segments(), &[PathSegment::Index(1)]);
    assert_eq!(
        err.to_string(),
        "error parsing at path [1] - expected type to be number but got string"
    );
}

#[test]
fn test_empty_array_accepted() {
    assert_eq!(array(string()).validate(&v(json!([]))).unwrap(), v(json!([])));
}

#[test]
fn test_union_of_string_and_number() {
    let schema = union([string(), number()]);
    assert_eq!(schema.validate(&v(json!(5))).unwrap(), v(json!(5)));

    let err = schema.validate(&v(json!(true))).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("expected type to be string but got boolean"), "{message}");
    assert!(message.contains("expected type to be number but got boolean"), "{message}");
}

#[test]
fn test_empty_union_rejects_everything() {
    let schema = union(Vec::new());
    assert!(!schema.check(&v(json!(1))));
    assert!(!schema.check(&Value::Undefined));
}

#[test]
fn test_nested_object_path() {
    let schema = object([("a", object([("b", string())]))]);
    let err = schema.validate(&v(json!({"a": {"b": 1}}))).unwrap_err();
    assert_eq!(err.path().to_string(), "a.b");
    assert_eq!(
        err.to_string(),
        "error parsing at path a.b - expected type to be string but got number"
    );
}

#[test]
fn test_prefix_added_exactly_once_at_depth() {
    let schema = object([(
        "orders",
        array(object([(
            "lines",
            array(object([("sku", string()), ("qty", number())])),
        )])),
    )]);
    let input = v(json!({"orders": [{"lines": [{"sku": "a", "qty": 1}, {"sku": "b", "qty": "2"}]}]}));
    let message = schema.validate(&input).unwrap_err().to_string();
    assert_eq!(message.matches("error parsing at path").count(), 1);
    assert_eq!(
        message,
        "error parsing at path orders[0].lines[1].qty - expected type to be number but got string"
    );
}

#[test]
fn test_intersection_of_two_objects() {
    let schema = intersection(object([("a", string())]), object([("b", number())]));
    let input = v(json!({"a": "x", "b": 1}));
    assert_eq!(schema.validate(&input).unwrap(), input);

    let err = schema.validate(&v(json!({"a": "x", "b": 1, "c": 2}))).unwrap_err();
    assert!(matches!(err.failure(), Failure::UnexpectedKeys(keys) if keys == &["c"]));
}

#[test]
fn test_intersection_with_permissive_side() {
    let schema = intersection(
        object([("a", string())]),
        object_with([("b", number())], ObjectOptions::permissive()),
    );
    assert!(schema.check(&v(json!({"a": "x", "b": 1, "c": 2}))));
}

#[test]
fn test_optional_and_nullable() {
    let schema = object([
        ("nick", string().optional()),
        ("manager", string().nullable()),
    ]);
    assert!(schema.check(&v(json!({"manager": null}))));
    assert!(schema.check(&v(json!({"nick": "z", "manager": "m"}))));

    let err = schema.validate(&v(json!({"nick": "z"}))).unwrap_err();
    assert_eq!(err.path().to_string(), "manager");
    assert!(err.to_string().contains("but got undefined"));

    assert!(!schema.check(&v(json!({"nick": null, "manager": null}))));
}

#[test]
fn test_unknown_field_requires_presence() {
    let schema = object([("meta", unknown())]);
    assert!(schema.check(&v(json!({"meta": {"anything": [1, 2]}}))));
    let err = schema.validate(&v(json!({}))).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"error parsing at path meta - required key "meta" is missing"#
    );
}

#[test]
fn test_lenient_union_tolerates_extra_keys_on_object_members() {
    let shapes = [
        object([("type", literal("circle")), ("r", number())]),
        object([("type", literal("square")), ("side", number())]),
    ];
    let input = v(json!({"type": "square", "side": 2, "color": "red"}));
    assert!(!union(shapes.clone()).check(&input));
    assert_eq!(
        union_with(shapes, UnionOptions::lenient()).validate(&input).unwrap(),
        input
    );
}

#[test]
fn test_union_failure_inside_object_keeps_member_messages() {
    let schema = object([("id", union([string(), number()]))]);
    let err = schema.validate(&v(json!({"id": null}))).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("error parsing at path id - "), "{message}");
    assert_eq!(message.lines().count(), 3);
}

#[test]
fn test_combinators_do_not_mutate_receiver() {
    let base = object([("a", string())]);
    let _optional = base.optional();
    let _nullable = base.nullable();
    let _both = base.and(object([("b", number())]));
    let _either = base.or(null());

    assert!(base.check(&v(json!({"a": "x"}))));
    assert!(!base.check(&Value::Undefined));
    assert!(!base.check(&Value::Null));
    assert!(!base.check(&v(json!({"a": "x", "b": 1}))));
}

#[test]
fn test_schema_shared_across_threads() {
    let schema = object([("n", number())]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = schema.clone();
            std::thread::spawn(move || schema.check(&v(json!({"n": i}))))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
