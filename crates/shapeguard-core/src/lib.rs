//! # shapeguard-core: Value Domain for Runtime Validation
//!
//! This crate defines the data that shapeguard schemas validate and the
//! vocabulary they report failures in. It depends on nothing internal;
//! `shapeguard-schema` builds on it.
//!
//! ## Contents
//!
//! 1. **[`Value`]**: the uniform structured value. JSON's data model plus
//!    `Undefined` for absent values. Any serde format decodes into it.
//!
//! 2. **[`ValueKind`]**: the runtime type tag named in type-mismatch
//!    messages (`string`, `number`, `boolean`, `null`, `undefined`,
//!    `array`, `object`).
//!
//! 3. **[`Path`] / [`PathSegment`]**: root-first locations inside a value,
//!    rendered as `a.b[2].c`.
//!
//! 4. **[`CanonicalText`]**: RFC 8785 rendering used to quote values in
//!    diagnostics.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shapeguard-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod path;
pub mod value;

pub use canonical::CanonicalText;
pub use error::{CanonicalizationError, CoreError};
pub use path::{Path, PathSegment};
pub use value::{Map, Number, Value, ValueKind};
