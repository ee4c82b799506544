//! Ordered mapping from [`Key`] to [`Value`].

use std::fmt;

use indexmap::IndexMap;

use super::{Key, Value};

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// This is the Mapping case of [`Value`] and the root container of a
/// [`PathTree`](crate::PathTree). Integer and string keys live side by side,
/// mirroring dynamic-array semantics: [`Map::push_back`] appends under the
/// next free integer key.
///
/// Removal preserves the order of the remaining entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    entries: IndexMap<Key, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains `key`
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts a value, returning the previous value under that key.
    ///
    /// Overwriting an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the next free integer key: one past the largest integer key,
    /// or 0 when there is none.
    ///
    /// Returns `None` when the largest key is `usize::MAX`.
    pub fn next_index(&self) -> Option<usize> {
        match self.entries.keys().filter_map(Key::as_index).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }

    /// Appends a value under the next free integer key and returns that key.
    ///
    /// Nothing is inserted and `None` is returned when no key is free.
    pub fn push_back(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Index(self.next_index()?);
        self.entries.insert(key.clone(), value.into());
        Some(key)
    }

    /// Returns true if the keys are exactly the integers `0..len` in any order.
    ///
    /// An empty map is list-shaped.
    pub fn is_list_shaped(&self) -> bool {
        let len = self.entries.len();
        self.entries
            .keys()
            .all(|key| matches!(key, Key::Index(i) if *i < len))
    }

    /// Returns a mutable slot for `key`, inserting [`Value::Null`] if missing
    pub(crate) fn slot(&mut self, key: Key) -> &mut Value {
        self.entries.entry(key).or_insert(Value::Null)
    }

    /// Reorders entries with the given comparator
    pub(crate) fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Key, &Key) -> std::cmp::Ordering,
    {
        self.entries.sort_by(|k1, _, k2, _| compare(k1, k2));
    }

    /// Returns an iterator over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over entries in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// A sequence becomes an integer-keyed map.
impl From<Vec<Value>> for Map {
    fn from(items: Vec<Value>) -> Self {
        items.into_iter().enumerate().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Map
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.entries.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
