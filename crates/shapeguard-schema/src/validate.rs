//! # Validation Engine
//!
//! Recursive descent over the schema tree in lock-step with the value. Each
//! node returns either its validated value or a [`ValidationError`] whose
//! path is relative to that node; the parent re-roots it under its own
//! segment with `within`.
//!
//! ## Result Policy
//!
//! Object and array nodes return values built from their children's results.
//! Unions return the first member's result. Intersections return the input
//! unchanged, because the two sides may each produce their own copy and
//! there is nothing to reconcile. No node transforms data, so a successful
//! validation always returns a value equal to its input, with one exception:
//! an object field that was absent and validated to `Undefined` stays
//! absent.
//!
//! ## Unknown Keys
//!
//! The `allow_unknown` flag passed to `Schema::check_value` applies to the
//! node it is passed to, never to that node's children. Unions with
//! `strict: false` set it for object members; intersections set it for
//! object and intersection sides and enforce their combined key set
//! themselves.

use shapeguard_core::{canonical, Map, Value, ValueKind};

use crate::error::{Failure, ValidationError};
use crate::node::{IntersectionSchema, ObjectSchema, Schema, UnionSchema};
use crate::options::ValidateOptions;

static UNDEFINED: Value = Value::Undefined;

impl Schema {
    /// Validate a value with default options.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, located by its path.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        self.validate_with(value, &ValidateOptions::default())
    }

    /// Validate a value with per-call options.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, located by its path.
    pub fn validate_with(
        &self,
        value: &Value,
        options: &ValidateOptions,
    ) -> Result<Value, ValidationError> {
        self.check_value(value, options.allow_unknown)
            .map_err(|mut err| {
                err.set_suppress_prefix(options.suppress_path_prefix);
                tracing::debug!(
                    schema = self.kind_name(),
                    path = %err.path(),
                    reason = %err.failure(),
                    "validation failed"
                );
                err
            })
    }

    /// True when [`validate`](Self::validate) would succeed.
    pub fn check(&self, value: &Value) -> bool {
        self.check_value(value, false).is_ok()
    }

    pub(crate) fn check_value(
        &self,
        value: &Value,
        allow_unknown: bool,
    ) -> Result<Value, ValidationError> {
        match self {
            Self::String => expect_kind(value, ValueKind::String),
            Self::Number => expect_kind(value, ValueKind::Number),
            Self::Boolean => expect_kind(value, ValueKind::Boolean),
            Self::Null => expect_kind(value, ValueKind::Null),
            Self::Undefined => expect_kind(value, ValueKind::Undefined),
            Self::Unknown => Ok(value.clone()),
            Self::Literal(expected) => check_literal(expected, value),
            Self::Object(object) => object.check(value, allow_unknown),
            Self::Array(element) => check_array(element, value),
            Self::Union(union) => union.check(value),
            Self::Intersection(both) => both.check(value, allow_unknown),
        }
    }
}

fn expect_kind(value: &Value, expected: ValueKind) -> Result<Value, ValidationError> {
    let actual = value.kind();
    if actual == expected {
        Ok(value.clone())
    } else {
        Err(ValidationError::new(Failure::TypeMismatch { expected, actual }))
    }
}

fn check_literal(expected: &Value, value: &Value) -> Result<Value, ValidationError> {
    if expected.strict_eq(value) {
        return Ok(value.clone());
    }
    let kind = value.kind();
    let actual = if kind.is_primitive() {
        canonical::render(value)
    } else {
        kind.to_string()
    };
    Err(ValidationError::new(Failure::LiteralMismatch {
        expected: canonical::render(expected),
        actual,
    }))
}

fn check_array(element: &Schema, value: &Value) -> Result<Value, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::new(Failure::TypeMismatch {
            expected: ValueKind::Array,
            actual: value.kind(),
        }));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| element.check_value(item, false).map_err(|e| e.within(i)))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Keys of `fields` not accepted by `is_declared`, in key order.
fn undeclared_keys(fields: &Map, is_declared: impl Fn(&str) -> bool) -> Vec<String> {
    fields
        .keys()
        .filter(|k| !is_declared(k.as_str()))
        .cloned()
        .collect()
}

impl ObjectSchema {
    fn check(&self, value: &Value, allow_unknown: bool) -> Result<Value, ValidationError> {
        let Value::Object(fields) = value else {
            return Err(ValidationError::new(Failure::TypeMismatch {
                expected: ValueKind::Object,
                actual: value.kind(),
            }));
        };

        if !(allow_unknown || self.options().allow_unknown) {
            let extra = undeclared_keys(fields, |k| self.shape().contains_key(k));
            if !extra.is_empty() {
                return Err(ValidationError::new(Failure::UnexpectedKeys(extra)));
            }
        }

        let mut output = fields.clone();
        for (key, child) in self.shape().iter() {
            let field = fields.get(key);
            if field.is_none() && matches!(child, Schema::Unknown) {
                return Err(ValidationError::new(Failure::MissingKey(key.to_owned())).within(key));
            }
            let result = child
                .check_value(field.unwrap_or(&UNDEFINED), false)
                .map_err(|e| e.within(key))?;
            if field.is_some() || !result.is_undefined() {
                output.insert(key.to_owned(), result);
            }
        }
        Ok(Value::Object(output))
    }
}

impl UnionSchema {
    fn check(&self, value: &Value) -> Result<Value, ValidationError> {
        let relax_objects = !self.options().strict;
        let mut failures = Vec::with_capacity(self.members().len());
        for (i, member) in self.members().iter().enumerate() {
            let allow_unknown = relax_objects && matches!(member, Schema::Object(_));
            match member.check_value(value, allow_unknown) {
                Ok(accepted) => return Ok(accepted),
                Err(err) => {
                    tracing::trace!(member = i, reason = %err, "union member rejected value");
                    failures.push(err);
                }
            }
        }
        Err(ValidationError::new(Failure::NoUnionMatch(failures)))
    }
}

impl IntersectionSchema {
    fn check(&self, value: &Value, allow_unknown: bool) -> Result<Value, ValidationError> {
        if let (false, Value::Object(fields), Some(keys)) =
            (allow_unknown, value, self.closed_keys())
        {
            let extra = undeclared_keys(fields, |k| keys.contains(k));
            if !extra.is_empty() {
                tracing::trace!(?extra, "intersection rejected undeclared keys");
                return Err(ValidationError::new(Failure::UnexpectedKeys(extra)));
            }
        }
        self.left().check_value(value, defers_key_policy(self.left()))?;
        self.right().check_value(value, defers_key_policy(self.right()))?;
        Ok(value.clone())
    }
}

/// Sides whose unknown-key check the enclosing intersection takes over.
fn defers_key_policy(side: &Schema) -> bool {
    matches!(side, Schema::Object(_) | Schema::Intersection(_))
}
