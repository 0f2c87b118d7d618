//! # Error Types
//!
//! Errors raised by the value domain itself. Validation failures are not
//! here; they live in `shapeguard-schema` next to the engine that produces
//! them.

use thiserror::Error;

/// Top-level error type for `shapeguard-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A float that JSON cannot carry (NaN or infinite).
    #[error("non-finite number cannot be represented as a value: {0}")]
    NonFiniteNumber(f64),

    /// `Undefined` at the root has no JSON representation.
    #[error("undefined has no JSON representation at the root of a value")]
    UndefinedRoot,

    /// Canonical rendering failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Error during canonical rendering.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
