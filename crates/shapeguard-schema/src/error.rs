//! # Validation Errors
//!
//! A validation call fails with exactly one [`ValidationError`]: the first
//! violation found, as a [`Failure`] reason plus the [`Path`] to where it
//! happened.
//!
//! ## Path Prefix
//!
//! Errors are plain return values. A composite node that receives a failing
//! child result prepends its own segment (field name or index) and passes the
//! error up. Nothing is rendered on the way. The human prefix
//! `error parsing at path <path> - ` is added once, when the error is
//! displayed, and only when the path is non-empty. A caller that wants the
//! bare reason sets `suppress_path_prefix` on the call.

use std::fmt;

use shapeguard_core::{Path, PathSegment, ValueKind};
use thiserror::Error;

/// Why a value was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Failure {
    /// The value's kind is not the kind the node accepts.
    #[error("expected type to be {expected} but got {actual}")]
    TypeMismatch {
        /// Kind the node accepts.
        expected: ValueKind,
        /// Kind of the value that was given.
        actual: ValueKind,
    },

    /// The value is not strictly equal to a literal's constant.
    #[error("expected value to be literal {expected} but got {actual}")]
    LiteralMismatch {
        /// Canonical JSON text of the constant.
        expected: String,
        /// Canonical JSON text of a primitive value, or the kind name of an
        /// array or object.
        actual: String,
    },

    /// The object carries keys its schema does not declare.
    #[error("unexpected keys on object: {}", quoted_list(.0))]
    UnexpectedKeys(Vec<String>),

    /// An `unknown` field is absent.
    #[error("required key {} is missing", quoted(.0))]
    MissingKey(String),

    /// Every member of a union rejected the value.
    #[error("{}", union_report(.0))]
    NoUnionMatch(Vec<ValidationError>),
}

/// A failure located within the validated value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    failure: Failure,
    path: Path,
    suppress_prefix: bool,
}

impl ValidationError {
    /// A failure at the root of the validated value.
    pub fn new(failure: Failure) -> Self {
        Self {
            failure,
            path: Path::root(),
            suppress_prefix: false,
        }
    }

    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// Root-first location of the failure.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rendered message, prefix included when it applies.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn into_parts(self) -> (Failure, Path) {
        (self.failure, self.path)
    }

    /// Re-root the error one level up, under `segment`.
    pub(crate) fn within(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.prepend(segment);
        self
    }

    pub(crate) fn set_suppress_prefix(&mut self, suppress: bool) {
        self.suppress_prefix = suppress;
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suppress_prefix || self.path.is_empty() {
            write!(f, "{}", self.failure)
        } else {
            write!(f, "error parsing at path {} - {}", self.path, self.failure)
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.failure)
    }
}

fn quoted(key: &str) -> String {
    serde_json::to_string(key).unwrap_or_else(|_| format!("\"{key}\""))
}

fn quoted_list(keys: &[String]) -> String {
    let items: Vec<String> = keys.iter().map(|k| quoted(k)).collect();
    format!("[{}]", items.join(","))
}

fn union_report(failures: &[ValidationError]) -> String {
    let mut out = String::from("value did not match any union member:");
    for failure in failures {
        out.push('\n');
        out.push_str(&failure.to_string());
    }
    out
}
