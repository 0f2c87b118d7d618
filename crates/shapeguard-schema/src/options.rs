//! # Validation Options
//!
//! Options come in two flavors. [`ValidateOptions`] are passed per call and
//! never become part of a schema. [`ObjectOptions`] and [`UnionOptions`] are
//! fixed when the node is built.
//!
//! All three deserialize with `#[serde(default, deny_unknown_fields)]` so
//! they can sit inside an application's own configuration file; a missing
//! field takes its default and a misspelled one is an error.

use serde::{Deserialize, Serialize};

/// Per-call options for [`Schema::validate_with`](crate::Schema::validate_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateOptions {
    /// Tolerate keys the validated object (or intersection of objects) does
    /// not declare. Applies to the node the call is made on, not to nested
    /// objects.
    pub allow_unknown: bool,
    /// Render the failure without the `error parsing at path <path> - `
    /// prefix.
    pub suppress_path_prefix: bool,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_unknown(mut self, allow_unknown: bool) -> Self {
        self.allow_unknown = allow_unknown;
        self
    }

    pub fn with_suppress_path_prefix(mut self, suppress: bool) -> Self {
        self.suppress_path_prefix = suppress;
        self
    }
}

/// Construction-time options of an object node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectOptions {
    /// Tolerate undeclared keys on every validation of this node.
    pub allow_unknown: bool,
}

impl ObjectOptions {
    /// Options with `allow_unknown` turned on.
    pub fn permissive() -> Self {
        Self {
            allow_unknown: true,
        }
    }
}

/// Construction-time options of a union node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnionOptions {
    /// When false, object members are tried with unknown keys tolerated.
    pub strict: bool,
}

impl UnionOptions {
    /// Options with `strict` turned off.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for UnionOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ValidateOptions::default();
        assert!(!opts.allow_unknown);
        assert!(!opts.suppress_path_prefix);
        assert!(!ObjectOptions::default().allow_unknown);
        assert!(UnionOptions::default().strict);
    }

    #[test]
    fn test_builder_setters() {
        let opts = ValidateOptions::new()
            .with_allow_unknown(true)
            .with_suppress_path_prefix(true);
        assert!(opts.allow_unknown);
        assert!(opts.suppress_path_prefix);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let opts: ValidateOptions = serde_json::from_str(r#"{"allow_unknown": true}"#).unwrap();
        assert!(opts.allow_unknown);
        assert!(!opts.suppress_path_prefix);

        let union: UnionOptions = serde_json::from_str("{}").unwrap();
        assert!(union.strict);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result: Result<ValidateOptions, _> =
            serde_json::from_str(r#"{"allow_unknwon": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_yaml_config() {
        let yaml = "allow_unknown: false\nsuppress_path_prefix: true\n";
        let opts: ValidateOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(opts, ValidateOptions::new().with_suppress_path_prefix(true));

        let union: UnionOptions = serde_yaml::from_str("strict: false").unwrap();
        assert_eq!(union, UnionOptions::lenient());
    }
}
