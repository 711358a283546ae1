//! Ordered map type for GGON maps.
//!
//! [`GgonMap`] wraps an [`IndexMap`] so entries keep the order they were
//! inserted in. GGON text is compared and round-tripped as written, so
//! iteration order decides the encoder's output. Re-inserting an existing key
//! replaces its value but keeps its original position, which is exactly how
//! the parser treats a duplicate key in a document.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ggon::{GgonMap, Value};
//!
//! let mut map = GgonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("team".to_string(), Value::from("red"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to GGON values.
///
/// Equality compares entries as a set of key/value pairs; use
/// [`GgonMap::keys`] when order matters.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::{GgonMap, Value};
///
/// let mut map = GgonMap::new();
/// map.insert("first".to_string(), Value::from("1"));
/// map.insert("second".to_string(), Value::from("2"));
/// map.insert("first".to_string(), Value::from("one"));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(map.get("first").and_then(|v| v.as_str()), Some("one"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GgonMap(IndexMap<String, Value>);

impl GgonMap {
    /// Creates an empty `GgonMap`.
    #[must_use]
    pub fn new() -> Self {
        GgonMap(IndexMap::new())
    }

    /// Creates an empty `GgonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        GgonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ggon::{GgonMap, Value};
    ///
    /// let mut map = GgonMap::new();
    /// assert!(map.insert("key".to_string(), Value::from("a")).is_none());
    /// assert!(map.insert("key".to_string(), Value::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries down to keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Default for GgonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Value>> for GgonMap {
    fn from(map: HashMap<String, Value>) -> Self {
        GgonMap(map.into_iter().collect())
    }
}

impl From<GgonMap> for HashMap<String, Value> {
    fn from(map: GgonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for GgonMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GgonMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for GgonMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        GgonMap(IndexMap::from_iter(iter))
    }
}
