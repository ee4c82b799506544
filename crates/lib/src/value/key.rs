//! Map keys.
//!
//! A [`Key`] is either a non-negative integer index or a string name. The two
//! are interchangeable as map keys: any string that is the canonical decimal
//! form of an index (`"0"`, `"17"`, but not `"017"` or `"-1"`) is stored as
//! [`Key::Index`], so `"items.0"` and an integer-keyed entry `0` address the
//! same slot.

use std::fmt;

/// A key in a [`Map`](super::Map), or one segment of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key, also used to index into sequences
    Index(usize),
    /// Any other string key
    Name(String),
}

impl Key {
    /// Returns the index if this is an integer key
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Returns true if this is an integer key
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

/// Parses `s` as a canonical decimal index: no sign, no leading zeros.
fn canonical_index(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse().ok()
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_index(s) {
            Some(index) => Key::Index(index),
            None => Key::Name(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(index) => Key::Index(index),
            None => Key::Name(s),
        }
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(index as usize)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        match usize::try_from(index) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(index.to_string()),
        }
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Key::Index(i) => serializer.serialize_u64(*i as u64),
            Key::Name(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or non-negative integer key")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Key, E> {
                usize::try_from(v)
                    .map(Key::Index)
                    .map_err(|_| E::custom(format!("key {v} does not fit in usize")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Key, E> {
                match usize::try_from(v) {
                    Ok(index) => Ok(Key::Index(index)),
                    Err(_) => Ok(Key::Name(v.to_string())),
                }
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key::from(v))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Key, E> {
                Ok(Key::from(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
