//! The value model for path trees.
//!
//! [`Value`] is a tagged union over everything a tree can hold:
//!
//! - [`Value::Null`] - absent/empty marker
//! - [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`] - scalars
//! - [`Value::List`] - ordered sequence of values
//! - [`Value::Map`] - ordered mapping from [`Key`] to values
//!
//! All traversal, merge, and flatten logic pattern-matches on these cases.
//!
//! # Direct Comparisons
//!
//! `Value` implements `PartialEq` with primitive types:
//!
//! ```
//! # use dotpath::Value;
//! assert!(Value::from("hello") == "hello");
//! assert!(Value::from(42) == 42);
//! assert!(!(Value::from(42) == "42"));
//! ```

use std::fmt;

use crate::errors::TreeError;

pub mod json;
pub mod key;
pub mod map;

pub use json::JsonOptions;
pub use key::Key;
pub use map::Map;

/// A node in a path tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Ordered mapping of keys to values
    Map(Map),
}

impl Value {
    /// Returns true for scalars and null
    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// Returns true for lists and maps
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers widen
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Number of items: entries for containers, 0 for null, 1 for scalars
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::List(items) => items.len(),
            Value::Map(map) => map.len(),
            _ => 1,
        }
    }

    /// Returns true if [`Value::len`] is zero
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for "blank" values: null, `false`, `0`, `0.0`, `""`,
    /// `"0"`, and empty containers.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Text(s) => s.is_empty() || s == "0",
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    /// Looks up a direct child by key; lists accept integer keys only
    pub fn child(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Value::Map(map), key) => map.get(key),
            (Value::List(items), Key::Index(i)) => items.get(*i),
            _ => None,
        }
    }

    /// Mutable form of [`Value::child`]
    pub fn child_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match (self, key) {
            (Value::Map(map), key) => map.get_mut(key),
            (Value::List(items), Key::Index(i)) => items.get_mut(*i),
            _ => None,
        }
    }

    /// Returns a writable slot for `key`, making room for it first.
    ///
    /// Scalars and null are replaced with an empty map. A list keeps its
    /// shape when `key` is an index at most one past the end (the slot at
    /// `len` is appended); any other key turns the list into an
    /// integer-keyed map holding the same elements.
    ///
    /// A missing slot is always vivified as a map, even for an index key,
    /// so `set("a.0", x)` yields `{"a": {"0": x}}` rather than `[x]`.
    pub(crate) fn slot(&mut self, key: Key) -> &mut Value {
        if let Value::List(items) = self {
            let fits = matches!(key, Key::Index(i) if i <= items.len());
            if !fits {
                let map = Map::from(std::mem::take(items));
                *self = Value::Map(map);
            }
        } else if !matches!(self, Value::Map(_)) {
            if !self.is_null() {
                tracing::debug!(
                    replaced = self.type_name(),
                    key = %key,
                    "Overwriting scalar with map to continue path"
                );
            }
            *self = Value::Map(Map::new());
        }

        match (self, key) {
            (Value::List(items), Key::Index(i)) => {
                if i == items.len() {
                    items.push(Value::Null);
                }
                &mut items[i]
            }
            (Value::Map(map), key) => map.slot(key),
            _ => unreachable!("slot container normalized above"),
        }
    }

    /// Removes a direct child, returning it.
    ///
    /// Removing the last element of a list pops it. Removing any other list
    /// element turns the list into an integer-keyed map so the remaining
    /// indices keep addressing the same elements.
    pub(crate) fn remove_child(&mut self, key: &Key) -> Option<Value> {
        match (&mut *self, key) {
            (Value::Map(map), key) => map.remove(key),
            (Value::List(items), Key::Index(i)) if *i + 1 == items.len() => items.pop(),
            (Value::List(items), Key::Index(i)) if *i < items.len() => {
                let mut map = Map::from(std::mem::take(items));
                let removed = map.remove(key);
                *self = Value::Map(map);
                removed
            }
            _ => None,
        }
    }

    /// Views this value as a list of items: a list yields its elements, null
    /// yields nothing, anything else yields itself.
    pub(crate) fn into_items(self) -> Vec<Value> {
        match self {
            Value::List(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        }
    }

    /// Views this value as a map: maps pass through, lists become
    /// integer-keyed maps, null becomes empty, scalars sit under key 0.
    pub fn into_map(self) -> Map {
        match self {
            Value::Map(map) => map,
            other => Map::from(other.into_items()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => write!(f, "{map}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// TryFrom implementations for typed reads
impl TryFrom<&Value> for String {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(TreeError::type_mismatch("text", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(TreeError::type_mismatch("int", value)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_float()
            .ok_or_else(|| TreeError::type_mismatch("float", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(TreeError::type_mismatch("bool", value)),
        }
    }
}

impl TryFrom<&Value> for Map {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(TreeError::type_mismatch("map", value)),
        }
    }
}

impl TryFrom<&Value> for Vec<Value> {
    type Error = TreeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items.clone()),
            _ => Err(TreeError::type_mismatch("list", value)),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}
