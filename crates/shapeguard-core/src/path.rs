//! # Validation Paths
//!
//! A [`Path`] locates a position inside a nested [`Value`](crate::Value),
//! relative to the root that was handed to the validator. Each step is a
//! [`PathSegment`]: a field name or an array index.
//!
//! Composite schema nodes build paths inside-out. A failing child reports
//! its path relative to itself, and each parent prepends its own segment on
//! the way back up, so the finished path reads root-first.
//!
//! ## Rendering
//!
//! Index segments render as `[n]`. A key segment renders bare when it is the
//! first segment and with a leading `.` otherwise:
//!
//! | Segments              | Rendered    |
//! |-----------------------|-------------|
//! | `a`, `b`              | `a.b`       |
//! | `items`, `2`, `name`  | `items[2].name` |
//! | `0`, `name`           | `[0].name`  |

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position inside an array.
    Index(usize),
    /// Field name inside an object.
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

/// Root-first sequence of path segments. Empty means the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty path, pointing at the root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a segment at the leaf end.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    /// Insert a segment at the root end.
    pub fn prepend(&mut self, segment: impl Into<PathSegment>) {
        self.0.insert(0, segment.into());
    }

    pub fn into_inner(self) -> Vec<PathSegment> {
        self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(k) if i > 0 => write!(f, ".{k}")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
