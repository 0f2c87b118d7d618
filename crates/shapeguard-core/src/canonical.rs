//! # Canonical Rendering
//!
//! Defines [`CanonicalText`], the RFC 8785 (JSON Canonicalization Scheme)
//! rendering of a [`Value`] used wherever a value is quoted inside a
//! diagnostic, most notably the expected constant of a literal schema.
//!
//! Canonical text is deterministic: object keys are sorted, separators are
//! compact, and numbers use the shortest round-tripping form. Two equal
//! values always render to the same text, so messages built from it are
//! stable across runs and platforms.
//!
//! A bare `Undefined` renders as `undefined`. Nested undefined values follow
//! the [`Value`] serialization rules: skipped in objects, `null` in arrays.

use std::fmt;

use crate::error::CanonicalizationError;
use crate::value::Value;

/// Text produced exclusively by JCS canonicalization of a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Render a value in canonical form.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if JCS
    /// serialization fails.
    pub fn new(value: &Value) -> Result<Self, CanonicalizationError> {
        if value.is_undefined() {
            return Ok(Self("undefined".to_owned()));
        }
        let s = serde_jcs::to_string(value)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical text for a value, falling back to its kind name if the value
/// cannot be serialized.
pub fn render(value: &Value) -> String {
    CanonicalText::new(value)
        .map(CanonicalText::into_string)
        .unwrap_or_else(|_| value.kind().to_string())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            (-1_000_000i64..1_000_000).prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(serde_json::Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                    .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Equal values always render to the same text.
        #[test]
        fn canonical_text_deterministic(v in json_value()) {
            let value = Value::from(v);
            let a = CanonicalText::new(&value).unwrap();
            let b = CanonicalText::new(&value.clone()).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Canonical text parses back to the same value.
        #[test]
        fn canonical_text_is_json(v in json_value()) {
            let value = Value::from(v.clone());
            let text = CanonicalText::new(&value).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
            prop_assert_eq!(parsed, v);
        }
    }
}
