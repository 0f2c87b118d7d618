//! # shapeguard-schema: Composable Runtime Schemas
//!
//! Declares the shape of untyped data and checks values against it at
//! runtime. A validation call returns the value on success, or the first
//! violation found, located by a path such as `items[2].name`.
//!
//! ```
//! use serde_json::json;
//! use shapeguard_core::Value;
//! use shapeguard_schema::{array, literal, number, object, string, union};
//!
//! let event = object([
//!     ("kind", union([literal("click"), literal("scroll")])),
//!     ("targets", array(object([("id", number()), ("label", string())]))),
//! ]);
//!
//! let ok = Value::from(json!({"kind": "click", "targets": [{"id": 1, "label": "ok"}]}));
//! assert_eq!(event.validate(&ok).unwrap(), ok);
//!
//! let bad = Value::from(json!({"kind": "click", "targets": [{"id": "1", "label": "ok"}]}));
//! let err = event.validate(&bad).unwrap_err();
//! assert_eq!(err.path().to_string(), "targets[0].id");
//! assert_eq!(
//!     err.to_string(),
//!     "error parsing at path targets[0].id - expected type to be number but got string"
//! );
//! ```
//!
//! ## Node Variants
//!
//! Leaves: `string`, `number`, `boolean`, `null`, `undefined`, `unknown`,
//! `literal`. Composites: `object`, `array`, `union`, `intersection`. The
//! combinators [`Schema::optional`], [`Schema::nullable`], [`Schema::and`]
//! and [`Schema::or`] wrap an existing node in a new union or intersection.
//!
//! ## Semantics Worth Knowing
//!
//! - Objects reject undeclared keys unless `allow_unknown` is set on the
//!   node or the call. The check runs before any field is validated.
//! - Fields are checked in declaration order; the first failure is returned.
//! - An `unknown()` field still requires its key to be present.
//! - Unions are first-match-wins. When every member fails, the error lists
//!   every member's message, one per line.
//! - Intersections validate both sides and return the input unchanged. Two
//!   closed object shapes intersect to the union of their keys: keys neither
//!   side declares are rejected.
//!
//! ## Crate Policy
//!
//! - Schemas are immutable and `Send + Sync`; build once, validate anywhere.
//! - Validation is synchronous and free of side effects.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod builder;
pub mod error;
pub mod node;
pub mod options;
pub mod shape;
mod validate;

pub use builder::{
    array, boolean, intersection, literal, null, number, object, object_with, string, undefined,
    union, union_with, unknown,
};
pub use error::{Failure, ValidationError};
pub use node::{IntersectionSchema, ObjectSchema, Schema, UnionSchema};
pub use options::{ObjectOptions, UnionOptions, ValidateOptions};
pub use shape::Shape;
