//! core::row
//!
//! Ordered key-to-value mapping for a single table row.
//!
//! # Design
//!
//! A row is an explicit insertion-ordered mapping from [`Key`] to string
//! value, backed by a vector of pairs. Iteration and serialization follow
//! the key order the row was built with, so generated JSON objects list
//! their fields in column order. The model keeps every row's key set equal
//! to the table's current key list; this type only provides the primitive
//! mutations that cascade uses.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::types::Key;

/// One record of values, one entry per current key.
///
/// # Example
///
/// ```
/// use rowforge::core::row::Row;
/// use rowforge::core::types::Key;
///
/// let id = Key::new("id").unwrap();
/// let name = Key::new("name").unwrap();
/// let mut row = Row::blank(&[id.clone(), name.clone()]);
///
/// assert_eq!(row.get(&id), Some(""));
/// row.set(&id, "42");
/// assert_eq!(row.get(&id), Some("42"));
/// assert!(row.has_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    entries: Vec<(Key, String)>,
}

impl Row {
    /// Create a row with an empty string for every given key.
    pub fn blank(keys: &[Key]) -> Self {
        Self {
            entries: keys
                .iter()
                .map(|key| (key.clone(), String::new()))
                .collect(),
        }
    }

    /// Get the value for a key, if the key is present.
    pub fn get(&self, key: &Key) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set the value for an existing key.
    ///
    /// Returns false if the key is not present in this row.
    pub fn set(&mut self, key: &Key, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                *v = value.into();
                true
            }
            None => false,
        }
    }

    /// Append a key with an empty value, unless already present.
    pub fn insert_blank(&mut self, key: &Key) {
        if self.get(key).is_none() {
            self.entries.push((key.clone(), String::new()));
        }
    }

    /// Remove a key and its value, if present.
    pub fn remove(&mut self, key: &Key) {
        self.entries.retain(|(k, _)| k != key);
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate over (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Whether any cell holds a non-empty value.
    pub fn has_value(&self) -> bool {
        self.entries.iter().any(|(_, v)| !v.is_empty())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the row holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
