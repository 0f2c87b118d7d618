//! # Schema Nodes
//!
//! [`Schema`] is a closed tagged union over the eleven node variants. Leaf
//! variants carry no payload (or, for literals, the constant they match).
//! Composite variants keep their payload behind an [`Arc`], which makes a
//! `Schema` cheap to clone and safe to share between threads.
//!
//! ## Immutability
//!
//! Payload fields are private and no method takes `&mut self`. Combinators
//! such as [`Schema::optional`] and [`Schema::and`] build a new node that
//! points at the receiver; the receiver is never changed. A schema built at
//! start-up can therefore be validated against from any number of threads
//! without locking.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use shapeguard_core::{canonical, Value};

use crate::options::{ObjectOptions, UnionOptions};
use crate::shape::Shape;

/// A runtime description of the values a validation call accepts.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Accepts strings.
    String,
    /// Accepts numbers.
    Number,
    /// Accepts booleans.
    Boolean,
    /// Accepts `null`.
    Null,
    /// Accepts `Undefined` (an absent value).
    Undefined,
    /// Accepts everything. As an object field it still requires the key to
    /// be present.
    Unknown,
    /// Accepts values strictly equal to the constant.
    Literal(Arc<Value>),
    /// Accepts objects matching a shape.
    Object(Arc<ObjectSchema>),
    /// Accepts arrays whose every element matches the element schema.
    Array(Arc<Schema>),
    /// Accepts values matching any member; the first match wins.
    Union(Arc<UnionSchema>),
    /// Accepts values matching both sides.
    Intersection(Arc<IntersectionSchema>),
}

/// Payload of [`Schema::Object`].
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    shape: Shape,
    options: ObjectOptions,
}

impl ObjectSchema {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn options(&self) -> ObjectOptions {
        self.options
    }

    /// Declared keys, or `None` when the node tolerates undeclared keys.
    pub(crate) fn closed_keys(&self) -> Option<BTreeSet<String>> {
        if self.options.allow_unknown {
            return None;
        }
        Some(self.shape.keys().map(str::to_owned).collect())
    }
}

/// Payload of [`Schema::Union`].
#[derive(Debug, Clone)]
pub struct UnionSchema {
    members: Vec<Schema>,
    options: UnionOptions,
}

impl UnionSchema {
    /// Members in the order they are tried.
    pub fn members(&self) -> &[Schema] {
        &self.members
    }

    pub fn options(&self) -> UnionOptions {
        self.options
    }
}

/// Payload of [`Schema::Intersection`].
///
/// The combined key policy is fixed at construction: when both sides are
/// closed over their declared keys (objects without `allow_unknown`, or
/// intersections of such objects), the intersection is closed over the
/// union of both key sets. Otherwise it is open.
#[derive(Debug, Clone)]
pub struct IntersectionSchema {
    left: Schema,
    right: Schema,
    closed_keys: Option<BTreeSet<String>>,
}

impl IntersectionSchema {
    pub fn left(&self) -> &Schema {
        &self.left
    }

    pub fn right(&self) -> &Schema {
        &self.right
    }

    /// Keys an object may carry, or `None` when undeclared keys are allowed.
    pub fn closed_keys(&self) -> Option<&BTreeSet<String>> {
        self.closed_keys.as_ref()
    }
}

impl Schema {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(Arc::new(value.into()))
    }

    pub fn object(shape: impl Into<Shape>, options: ObjectOptions) -> Self {
        Self::Object(Arc::new(ObjectSchema {
            shape: shape.into(),
            options,
        }))
    }

    pub fn array(element: Schema) -> Self {
        Self::Array(Arc::new(element))
    }

    pub fn union(members: impl IntoIterator<Item = Schema>, options: UnionOptions) -> Self {
        Self::Union(Arc::new(UnionSchema {
            members: members.into_iter().collect(),
            options,
        }))
    }

    pub fn intersection(left: Schema, right: Schema) -> Self {
        let closed_keys = match (left.closed_keys(), right.closed_keys()) {
            (Some(mut keys), Some(more)) => {
                keys.extend(more);
                Some(keys)
            }
            _ => None,
        };
        Self::Intersection(Arc::new(IntersectionSchema {
            left,
            right,
            closed_keys,
        }))
    }

    /// Accept `Undefined` as well: `Union[self, Undefined]`.
    pub fn optional(&self) -> Self {
        Self::union([self.clone(), Self::Undefined], UnionOptions::default())
    }

    /// Accept `null` as well: `Union[self, Null]`.
    pub fn nullable(&self) -> Self {
        Self::union([self.clone(), Self::Null], UnionOptions::default())
    }

    /// `Intersection(self, other)`.
    pub fn and(&self, other: Schema) -> Self {
        Self::intersection(self.clone(), other)
    }

    /// `Union[self, other]`.
    pub fn or(&self, other: Schema) -> Self {
        Self::union([self.clone(), other], UnionOptions::default())
    }

    /// Short name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Unknown => "unknown",
            Self::Literal(_) => "literal",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Union(_) => "union",
            Self::Intersection(_) => "intersection",
        }
    }

    fn closed_keys(&self) -> Option<BTreeSet<String>> {
        match self {
            Self::Object(object) => object.closed_keys(),
            Self::Intersection(both) => both.closed_keys.clone(),
            _ => None,
        }
    }

    /// True for variants that print with infix operators.
    fn is_compound(&self) -> bool {
        matches!(self, Self::Union(_) | Self::Intersection(_))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Schema {
    /// Compact type notation: `string`, `number[]`, `{ a: string; b?: number }`,
    /// `string | null`, `A & B`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.write_str(&canonical::render(value)),
            Self::Object(object) => {
                if object.shape.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (key, schema)) in object.shape.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    match optional_inner(schema) {
                        Some(members) => {
                            write!(f, "{key}?: ")?;
                            fmt_members(f, &members, " | ")?;
                        }
                        None => write!(f, "{key}: {schema}")?,
                    }
                }
                f.write_str(" }")
            }
            Self::Array(element) => {
                element.fmt_operand(f)?;
                f.write_str("[]")
            }
            Self::Union(union) => {
                let members: Vec<&Schema> = union.members.iter().collect();
                fmt_members(f, &members, " | ")
            }
            Self::Intersection(both) => {
                both.left.fmt_operand(f)?;
                f.write_str(" & ")?;
                both.right.fmt_operand(f)
            }
            leaf => f.write_str(leaf.kind_name()),
        }
    }
}

/// For a union containing `undefined`, the remaining members.
fn optional_inner(schema: &Schema) -> Option<Vec<&Schema>> {
    let Schema::Union(union) = schema else {
        return None;
    };
    if !union.members.iter().any(|m| matches!(m, Schema::Undefined)) {
        return None;
    }
    let rest: Vec<&Schema> = union
        .members
        .iter()
        .filter(|m| !matches!(m, Schema::Undefined))
        .collect();
    if rest.is_empty() {
        return None;
    }
    Some(rest)
}

fn fmt_members(f: &mut fmt::Formatter<'_>, members: &[&Schema], sep: &str) -> fmt::Result {
    if members.is_empty() {
        return f.write_str("never");
    }
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        member.fmt_operand(f)?;
    }
    Ok(())
}
