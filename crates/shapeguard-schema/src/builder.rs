//! # Builders
//!
//! Free functions that construct schema nodes, re-exported at the crate
//! root so a schema reads like a type declaration:
//!
//! ```
//! use shapeguard_schema::{array, number, object, string};
//!
//! let user = object([
//!     ("name", string()),
//!     ("scores", array(number())),
//!     ("nick", string().optional()),
//! ]);
//! assert_eq!(user.to_string(), "{ name: string; scores: number[]; nick?: string }");
//! ```

use shapeguard_core::Value;

use crate::node::Schema;
use crate::options::{ObjectOptions, UnionOptions};
use crate::shape::Shape;

pub fn string() -> Schema {
    Schema::String
}

pub fn number() -> Schema {
    Schema::Number
}

pub fn boolean() -> Schema {
    Schema::Boolean
}

pub fn null() -> Schema {
    Schema::Null
}

pub fn undefined() -> Schema {
    Schema::Undefined
}

/// Accepts any value. As an object field the key must still be present;
/// use `unknown().optional()` to make it optional.
pub fn unknown() -> Schema {
    Schema::Unknown
}

/// Accepts values strictly equal to `value`.
pub fn literal(value: impl Into<Value>) -> Schema {
    Schema::literal(value)
}

/// Object node rejecting undeclared keys.
pub fn object(shape: impl Into<Shape>) -> Schema {
    Schema::object(shape, ObjectOptions::default())
}

pub fn object_with(shape: impl Into<Shape>, options: ObjectOptions) -> Schema {
    Schema::object(shape, options)
}

pub fn array(element: Schema) -> Schema {
    Schema::array(element)
}

/// Strict union: members are tried in order, first match wins.
pub fn union(members: impl IntoIterator<Item = Schema>) -> Schema {
    Schema::union(members, UnionOptions::default())
}

pub fn union_with(members: impl IntoIterator<Item = Schema>, options: UnionOptions) -> Schema {
    Schema::union(members, options)
}

pub fn intersection(left: Schema, right: Schema) -> Schema {
    Schema::intersection(left, right)
}
