//! # Object Shapes
//!
//! A [`Shape`] is the ordered set of declared fields of an object node.
//! Declaration order decides which field is checked first, and therefore
//! which failure is reported when several fields are invalid. It plays no
//! part in whether a value is accepted.

use std::collections::HashMap;

use crate::node::Schema;

/// Ordered mapping from field name to the schema of that field.
///
/// Inserting a key that is already declared replaces its schema and keeps
/// its original position.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    fields: Vec<(String, Schema)>,
    positions: HashMap<String, usize>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn field(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.insert(key, schema);
        self
    }

    /// Declare a field, returning the schema it replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, schema: Schema) -> Option<Schema> {
        let key = key.into();
        if let Some(&pos) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.fields[pos].1, schema));
        }
        self.positions.insert(key.clone(), self.fields.len());
        self.fields.push((key, schema));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Schema> {
        self.positions.get(key).map(|&pos| &self.fields[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Schema)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, Schema)>>(iter: I) -> Self {
        let mut shape = Shape::new();
        for (key, schema) in iter {
            shape.insert(key, schema);
        }
        shape
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Schema); N]> for Shape {
    fn from(fields: [(K, Schema); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<K: Into<String>> From<Vec<(K, Schema)>> for Shape {
    fn from(fields: Vec<(K, Schema)>) -> Self {
        fields.into_iter().collect()
    }
}
