//! Path types for delimited tree access.
//!
//! A path is a string such as `"user.profile.name"` that is split on a
//! [`Delimiter`] into an ordered sequence of [`Key`] segments. Splitting is a
//! literal split with no escaping and no normalization: `"a..b"` has three
//! segments, the middle one empty.
//!
//! The Path/PathBuf types follow the same borrowed/owned pattern as
//! `std::path::Path`/`PathBuf`. Unlike filesystem paths they carry no
//! delimiter of their own; the [`PathTree`](crate::PathTree) supplies it.
//!
//! # Usage
//!
//! ```rust
//! use dotpath::{Delimiter, Key, Path};
//!
//! let path = Path::new("users.0.name");
//! let segments: Vec<Key> = path.segments(&Delimiter::default()).collect();
//! assert_eq!(segments, vec![Key::from("users"), Key::Index(0), Key::from("name")]);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::value::Key;

/// The default path delimiter.
pub const DEFAULT_DELIMITER: &str = ".";

/// A non-empty string that separates path segments.
///
/// An empty delimiter falls back to [`DEFAULT_DELIMITER`].
///
/// ```rust
/// # use dotpath::Delimiter;
/// assert_eq!(Delimiter::new("").as_str(), ".");
/// assert_eq!(Delimiter::new("::").as_str(), "::");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    /// Creates a delimiter, falling back to the default when `s` is empty
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Self::default()
        } else {
            Self(s)
        }
    }

    /// Returns the delimiter as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER.to_string())
    }
}

impl From<String> for Delimiter {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Delimiter {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Delimiter> for String {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A borrowed path.
///
/// `Path` is the borrowed counterpart to [`PathBuf`], similar to how `&str`
/// relates to `String`. Every string is a valid path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wraps a string slice as a path
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        let s: &str = s.as_ref();
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The whole path as a single key, without splitting
    pub fn literal_key(&self) -> Key {
        Key::from(&self.inner)
    }

    /// Returns true if the path contains the delimiter
    pub fn is_nested(&self, delimiter: &Delimiter) -> bool {
        self.inner.contains(delimiter.as_str())
    }

    /// Splits the path into segments.
    ///
    /// Always yields at least one segment; the empty path yields one empty
    /// segment.
    pub fn segments<'a>(&'a self, delimiter: &'a Delimiter) -> impl Iterator<Item = Key> + 'a {
        self.inner.split(delimiter.as_str()).map(Key::from)
    }

    /// Converts this `Path` to an owned `PathBuf`
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

/// An owned path.
///
/// # Examples
///
/// ```rust
/// # use dotpath::{Delimiter, Key, PathBuf};
/// let delimiter = Delimiter::default();
/// let path = PathBuf::from("users").join(&Key::Index(0), &delimiter);
/// assert_eq!(path.as_str(), "users.0");
///
/// // Integer keys make single-segment paths
/// assert_eq!(PathBuf::from(3usize).as_str(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    inner: String,
}

impl PathBuf {
    /// Creates a new empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment, inserting the delimiter unless the path is empty
    pub fn push(&mut self, segment: &Key, delimiter: &Delimiter) {
        if !self.inner.is_empty() {
            self.inner.push_str(delimiter.as_str());
        }
        self.inner.push_str(&segment.to_string());
    }

    /// Returns a new path with `segment` appended
    pub fn join(&self, segment: &Key, delimiter: &Delimiter) -> PathBuf {
        let mut joined = self.clone();
        joined.push(segment, delimiter);
        joined
    }

    /// Consumes the path, returning the underlying string
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&String> for PathBuf {
    fn from(s: &String) -> Self {
        Self { inner: s.clone() }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<Key> for PathBuf {
    fn from(key: Key) -> Self {
        Self {
            inner: key.to_string(),
        }
    }
}

impl From<&Key> for PathBuf {
    fn from(key: &Key) -> Self {
        Self {
            inner: key.to_string(),
        }
    }
}

impl From<usize> for PathBuf {
    fn from(index: usize) -> Self {
        Self {
            inner: index.to_string(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
