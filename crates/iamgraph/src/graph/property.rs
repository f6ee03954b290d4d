//! Renderer hints attached to nodes and edges.
//!
//! Layered layouts read `subset` and force layouts read `size`; both are
//! integers written by the annotation passes. Keeping them here leaves the
//! typed fields of [`Node`](super::Node) to what the graph model understands.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered integer hints keyed by renderer attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    data: IndexMap<String, i64>,
}

impl PropertyMap {
    /// Create an empty hint map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a hint, replacing any previous value but keeping its position.
    pub fn insert(&mut self, key: impl Into<String>, value: i64) {
        self.data.insert(key.into(), value);
    }

    /// Write every hint of `other` into this map; hints only present here stay.
    pub fn merge(&mut self, other: PropertyMap) {
        self.data.extend(other.data);
    }

    /// Value of a hint.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.data.get(key).copied()
    }

    /// Number of hints.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no hint is set.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hints in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.data.iter().map(|(key, value)| (key.as_str(), *value))
    }
}
