//! The path-addressed tree.
//!
//! [`PathTree`] owns a root [`Map`] and a [`Delimiter`] and exposes every
//! read, write, and merge operation through delimited path strings:
//!
//! ```
//! # use dotpath::{PathTree, Value};
//! # use serde_json::json;
//! let mut tree = PathTree::new();
//! tree.set("server.port", 8080);
//! tree.push("server.hosts", "a.example");
//! tree.push("server.hosts", "b.example");
//!
//! assert_eq!(tree.get("server.port"), Some(Value::Int(8080)));
//! assert_eq!(tree.get("server.hosts.1"), Some(Value::from("b.example")));
//! assert!(!tree.has("server.tls"));
//! assert_eq!(tree.get_or("server.tls", false), Value::Bool(false));
//! ```
//!
//! ## Resolution rules
//!
//! - Reads stop at the first missing segment and report `None`.
//! - Writes create every missing intermediate container. An intermediate
//!   scalar is replaced by an empty map without error.
//! - Reads and deletes first check whether the whole path is itself a
//!   top-level key (`"a.b"` stored literally) and prefer that entry over the
//!   nested interpretation. Writes always split.
//!
//! ## Ownership
//!
//! A tree normally owns its root. It can instead be bound to a
//! [`SharedMap`] handle; every mutation is then visible through the handle
//! and vice versa. Cloning a tree always produces an independent owned
//! snapshot.

use std::{cell::RefCell, fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::{
    errors::TreeError,
    merge::MergeStrategy,
    path::{Delimiter, Path},
    transform,
    value::{JsonOptions, Key, Map, Value},
};

pub mod options;
mod resolve;
mod root;

pub use options::{TreeBuilder, TreeOptions};
pub use root::SharedMap;
use root::Root;

/// A nested map addressed by delimited paths.
pub struct PathTree {
    root: Root,
    delimiter: Delimiter,
}

/// What a path currently holds, as far as [`PathTree::add`] cares
enum Occupancy {
    Vacant,
    Map,
    Taken,
}

impl PathTree {
    /// Creates an empty tree with the default delimiter
    pub fn new() -> Self {
        Self {
            root: Root::default(),
            delimiter: Delimiter::default(),
        }
    }

    /// Starts a [`TreeBuilder`]
    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    /// Creates a tree from initial items with the default options.
    ///
    /// Maps are taken as the root, lists become integer-keyed maps, a bare
    /// scalar becomes a one-element list and null an empty tree.
    pub fn from_value(items: impl Into<Value>) -> Self {
        Self::with_options(items, TreeOptions::default())
    }

    /// Creates a tree from initial items and options.
    ///
    /// With `options.parse` set, every top-level key of `items` is written
    /// through [`PathTree::set`], so `{"a.b": 1}` becomes `{"a": {"b": 1}}`.
    pub fn with_options(items: impl Into<Value>, options: TreeOptions) -> Self {
        let items = items.into().into_map();
        let mut tree = Self {
            root: Root::default(),
            delimiter: options.delimiter,
        };
        if options.parse {
            debug!(
                entries = items.len(),
                delimiter = %tree.delimiter,
                "Parsing top-level keys as paths"
            );
            for (key, value) in items {
                tree.set(key.to_string(), value);
            }
        } else {
            tree.root = Root::Owned(items);
        }
        tree
    }

    /// Parses a JSON document into a tree
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| TreeError::Construction {
                reason: e.to_string(),
            })?;
        Ok(Self::from_value(value))
    }

    /// Builds a tree from any serializable value
    pub fn from_serialize<T: Serialize + ?Sized>(items: &T) -> Result<Self, TreeError> {
        let json = serde_json::to_value(items).map_err(|e| TreeError::Construction {
            reason: e.to_string(),
        })?;
        Ok(Self::from_value(json))
    }

    /// Creates a tree bound to a caller-held map.
    ///
    /// ```
    /// # use std::{cell::RefCell, rc::Rc};
    /// # use dotpath::{Map, PathTree, SharedMap, Value};
    /// let handle: SharedMap = Rc::new(RefCell::new(Map::new()));
    /// let mut tree = PathTree::shared(Rc::clone(&handle));
    /// tree.set("a.b", 1);
    /// assert_eq!(handle.borrow().len(), 1);
    /// ```
    pub fn shared(handle: SharedMap) -> Self {
        Self::shared_with(handle, Delimiter::default())
    }

    /// Creates a tree bound to a caller-held map with a custom delimiter
    pub fn shared_with(handle: SharedMap, delimiter: impl Into<Delimiter>) -> Self {
        Self {
            root: Root::Shared(handle),
            delimiter: delimiter.into(),
        }
    }

    /// Rebinds this tree to a caller-held map, dropping the current root
    pub fn bind(&mut self, handle: SharedMap) -> &mut Self {
        debug!(was_shared = self.root.is_shared(), "Binding tree to shared map");
        self.root = Root::Shared(handle);
        self
    }

    /// Switches this tree to shared mode and returns the handle.
    ///
    /// An owned root moves into a new handle. A tree that is already shared
    /// returns another clone of its handle.
    pub fn share(&mut self) -> SharedMap {
        if !self.root.is_shared() {
            debug!("Moving owned root into a shared map");
        }
        self.root.share()
    }

    /// Returns true if the root is bound to a shared map
    pub fn is_shared(&self) -> bool {
        self.root.is_shared()
    }

    /// The delimiter used to split paths
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    // ---------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------

    /// Gets a copy of the value at `path`.
    ///
    /// Returns `None` when any segment fails to resolve. A stored null is
    /// returned as `Some(Value::Null)`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Value> {
        self.inspect(path, |value| value.cloned())
    }

    /// Gets the value at `path`, or `default` when it does not resolve
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        self.get(path).unwrap_or_else(|| default.into())
    }

    /// Runs `f` on a borrow of the value at `path`, without copying it
    pub fn inspect<R>(&self, path: impl AsRef<Path>, f: impl FnOnce(Option<&Value>) -> R) -> R {
        let path = path.as_ref();
        self.root
            .with(|root| f(resolve::lookup(root, path, &self.delimiter)))
    }

    /// Runs `f` on a borrow of the whole root
    pub fn with_items<R>(&self, f: impl FnOnce(&Map) -> R) -> R {
        self.root.with(f)
    }

    /// Returns a snapshot of the whole root
    pub fn all(&self) -> Map {
        self.root.with(Map::clone)
    }

    /// Returns true if `path` resolves, even to null
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.inspect(path, |value| value.is_some())
    }

    /// Returns true if every path resolves.
    ///
    /// An empty set of paths is never satisfied, and nothing is present in
    /// an empty tree.
    pub fn has_all<I, P>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut paths = paths.into_iter().peekable();
        if paths.peek().is_none() || self.root.with(Map::is_empty) {
            return false;
        }
        paths.all(|path| self.has(path))
    }

    /// Reads the value at `path` as a concrete type.
    ///
    /// ```
    /// # use dotpath::PathTree;
    /// # use serde_json::json;
    /// let tree = PathTree::from_value(json!({"port": 8080, "name": "api"}));
    /// assert_eq!(tree.get_as::<i64>("port").unwrap(), 8080);
    /// assert!(tree.get_as::<i64>("name").unwrap_err().is_type_error());
    /// assert!(tree.get_as::<i64>("missing").unwrap_err().is_not_found());
    /// ```
    pub fn get_as<T>(&self, path: impl AsRef<Path>) -> Result<T, TreeError>
    where
        T: for<'v> TryFrom<&'v Value, Error = TreeError>,
    {
        let path = path.as_ref();
        self.inspect(path, |value| match value {
            Some(value) => T::try_from(value),
            None => Err(TreeError::NotFound {
                path: path.to_string(),
            }),
        })
    }

    /// Deserializes the subtree at `path` into any `Deserialize` type
    pub fn get_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> crate::Result<T> {
        let path = path.as_ref();
        let json = self
            .inspect(path, |value| value.map(serde_json::Value::from))
            .ok_or_else(|| TreeError::NotFound {
                path: path.to_string(),
            })?;
        let value = serde_json::from_value(json).map_err(|e| TreeError::Deserialization {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(value)
    }

    /// Serializes `value` and stores the result as a subtree at `path`
    pub fn set_json<T: Serialize + ?Sized>(
        &mut self,
        path: impl AsRef<Path>,
        value: &T,
    ) -> crate::Result<&mut Self> {
        let json = serde_json::to_value(value).map_err(|e| TreeError::Serialization {
            reason: e.to_string(),
        })?;
        Ok(self.set(path, json))
    }

    /// Number of items at the root
    pub fn count(&self) -> usize {
        self.root.with(Map::len)
    }

    /// Number of items at `path`: entries of a container, 1 for a scalar,
    /// 0 for null or a missing path
    pub fn count_at(&self, path: impl AsRef<Path>) -> usize {
        self.inspect(path, |value| value.map_or(0, Value::len))
    }

    /// Returns true if the root has no entries
    pub fn is_empty(&self) -> bool {
        self.root.with(Map::is_empty)
    }

    /// Returns true if `path` is missing or holds a blank value
    /// (see [`Value::is_blank`])
    pub fn is_empty_at(&self, path: impl AsRef<Path>) -> bool {
        self.inspect(path, |value| value.is_none_or(Value::is_blank))
    }

    /// Returns true if every path is missing or blank
    pub fn is_empty_all<I, P>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().all(|path| self.is_empty_at(path))
    }

    // ---------------------------------------------------------------
    // Writes
    // ---------------------------------------------------------------

    /// Writes `value` at `path`, creating intermediate maps as needed
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        let path = path.as_ref();
        let value = value.into();
        self.root
            .with_mut(|root| resolve::assign(root, path, &self.delimiter, value));
        self
    }

    /// Applies several writes in order; later entries win
    pub fn set_many<I, P, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<Path>,
        V: Into<Value>,
    {
        for (path, value) in entries {
            self.set(path, value);
        }
        self
    }

    /// Replaces the whole root with `items`, writing through in shared mode
    pub fn set_items(&mut self, items: impl Into<Value>) -> &mut Self {
        self.root.replace(items.into().into_map());
        self
    }

    /// Removes the value at `path` and returns it.
    ///
    /// Intermediates are never created; a missing segment makes this a
    /// no-op.
    pub fn delete(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let path = path.as_ref();
        let removed = self
            .root
            .with_mut(|root| resolve::remove(root, path, &self.delimiter));
        if removed.is_none() {
            trace!(%path, "Nothing to delete");
        }
        removed
    }

    /// Deletes every path in order
    pub fn delete_many<I, P>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.delete(path);
        }
        self
    }

    /// Sets `path` to an empty map, creating intermediates as needed
    pub fn clear(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.set(path, Map::new())
    }

    /// Clears every path in order
    pub fn clear_many<I, P>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.clear(path);
        }
        self
    }

    /// Removes every entry from the root
    pub fn clear_all(&mut self) -> &mut Self {
        self.root.with_mut(Map::clear);
        self
    }

    /// Writes `value` at `path` only if nothing non-null is stored there.
    ///
    /// A non-empty map added onto an existing map is applied key by key, so
    /// each child is only filled in where it is still missing:
    ///
    /// ```
    /// # use dotpath::{PathTree, Value};
    /// # use serde_json::json;
    /// let mut tree = PathTree::from_value(json!({"db": {"host": "prod"}}));
    /// tree.add("db", json!({"host": "localhost", "port": 5432}));
    /// assert_eq!(tree.get("db.host"), Some(Value::from("prod")));
    /// assert_eq!(tree.get("db.port"), Some(Value::Int(5432)));
    /// ```
    pub fn add(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        self.add_value(path.as_ref(), value.into());
        self
    }

    fn add_value(&mut self, path: &Path, value: Value) {
        let occupancy = self.inspect(path, |existing| match existing {
            None | Some(Value::Null) => Occupancy::Vacant,
            Some(Value::Map(_)) => Occupancy::Map,
            Some(_) => Occupancy::Taken,
        });

        match (occupancy, value) {
            (Occupancy::Vacant, value) => {
                self.set(path, value);
            }
            (Occupancy::Map, Value::Map(children)) if !children.is_empty() => {
                let parent = path.to_path_buf();
                for (key, child) in children {
                    let child_path = parent.join(&key, &self.delimiter);
                    self.add_value(&child_path, child);
                }
            }
            _ => trace!(%path, "Path already set, add skipped"),
        }
    }

    /// Applies [`PathTree::add`] to several entries in order
    pub fn add_many<I, P, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<Path>,
        V: Into<Value>,
    {
        for (path, value) in entries {
            self.add(path, value);
        }
        self
    }

    /// Appends `value` to the list at `path`.
    ///
    /// A missing path, null, or empty map becomes a new one-element list.
    /// A map keyed only by integers takes the value under its next free
    /// index. Any other value is left alone.
    pub fn push(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        let path = path.as_ref();
        let value = value.into();
        let delimiter = &self.delimiter;
        self.root.with_mut(|root| {
            match resolve::lookup_mut(root, path, delimiter) {
                Some(Value::List(items)) => items.push(value),
                None => resolve::assign(root, path, delimiter, Value::List(vec![value])),
                Some(slot) if slot.is_null() || slot.as_map().is_some_and(Map::is_empty) => {
                    *slot = Value::List(vec![value]);
                }
                Some(Value::Map(map)) if map.keys().all(Key::is_index) => {
                    if map.push_back(value).is_none() {
                        debug!(%path, "No free integer key left, skipping push");
                    }
                }
                Some(other) => {
                    debug!(%path, found = other.type_name(), "Cannot push onto a non-list value");
                }
            }
        });
        self
    }

    /// Appends `value` to the root under its next free integer key
    pub fn push_root(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if self.root.with_mut(|root| root.push_back(value)).is_none() {
            debug!("No free integer key left at the root, skipping push");
        }
        self
    }

    /// Removes and returns the value at `path`
    pub fn pull(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        self.delete(path)
    }

    /// Removes and returns the value at `path`, or `default` when missing
    pub fn pull_or(&mut self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        self.pull(path).unwrap_or_else(|| default.into())
    }

    /// Empties the tree, returning everything it held
    pub fn pull_all(&mut self) -> Map {
        self.root.replace(Map::new())
    }

    // ---------------------------------------------------------------
    // Merges
    // ---------------------------------------------------------------

    /// Combines `source` into the root using `strategy`.
    ///
    /// The source is viewed as a map the same way construction does, so a
    /// list merges as integer-keyed entries and another tree merges its
    /// root.
    pub fn merge_with(&mut self, strategy: MergeStrategy, source: impl Into<Value>) -> &mut Self {
        let source = source.into().into_map();
        debug!(
            strategy = strategy.as_str(),
            entries = source.len(),
            "Merging into root"
        );
        self.root.with_mut(|root| {
            let target = std::mem::take(root);
            *root = strategy.merge(target, source);
        });
        self
    }

    /// Combines `source` into the subtree at `path` using `strategy`.
    ///
    /// The current subtree is viewed as a map (missing means empty), the
    /// two are combined, and the result is written back with
    /// [`PathTree::set`].
    pub fn merge_at_with(
        &mut self,
        strategy: MergeStrategy,
        path: impl AsRef<Path>,
        source: impl Into<Value>,
    ) -> &mut Self {
        let path = path.as_ref();
        let source = source.into().into_map();
        debug!(
            strategy = strategy.as_str(),
            %path,
            entries = source.len(),
            "Merging into subtree"
        );
        let target = self.get(path).map_or_else(Map::new, Value::into_map);
        self.set(path, strategy.merge(target, source))
    }

    /// Shallow merge at the root: later values replace earlier ones
    pub fn merge(&mut self, source: impl Into<Value>) -> &mut Self {
        self.merge_with(MergeStrategy::Shallow, source)
    }

    /// Shallow merge into the subtree at `path`
    pub fn merge_at(&mut self, path: impl AsRef<Path>, source: impl Into<Value>) -> &mut Self {
        self.merge_at_with(MergeStrategy::Shallow, path, source)
    }

    /// Recursive merge at the root; colliding non-map values accumulate
    pub fn merge_recursive(&mut self, source: impl Into<Value>) -> &mut Self {
        self.merge_with(MergeStrategy::Recursive, source)
    }

    /// Recursive merge into the subtree at `path`
    pub fn merge_recursive_at(
        &mut self,
        path: impl AsRef<Path>,
        source: impl Into<Value>,
    ) -> &mut Self {
        self.merge_at_with(MergeStrategy::Recursive, path, source)
    }

    /// Recursive merge at the root; colliding non-map values are replaced
    pub fn merge_recursive_distinct(&mut self, source: impl Into<Value>) -> &mut Self {
        self.merge_with(MergeStrategy::RecursiveDistinct, source)
    }

    /// Distinct recursive merge into the subtree at `path`
    pub fn merge_recursive_distinct_at(
        &mut self,
        path: impl AsRef<Path>,
        source: impl Into<Value>,
    ) -> &mut Self {
        self.merge_at_with(MergeStrategy::RecursiveDistinct, path, source)
    }

    /// Key-by-key replacement at the root, integer keys included
    pub fn replace(&mut self, source: impl Into<Value>) -> &mut Self {
        self.merge_with(MergeStrategy::Replace, source)
    }

    /// Key-by-key replacement within the subtree at `path`
    pub fn replace_at(&mut self, path: impl AsRef<Path>, source: impl Into<Value>) -> &mut Self {
        self.merge_at_with(MergeStrategy::Replace, path, source)
    }

    // ---------------------------------------------------------------
    // Transforms and output
    // ---------------------------------------------------------------

    /// Flattens the tree using its own delimiter and no prefix
    pub fn flatten(&self) -> Map {
        self.flatten_with(&self.delimiter, "")
    }

    /// Flattens the tree with an explicit delimiter and key prefix
    pub fn flatten_with(&self, delimiter: &Delimiter, prefix: &str) -> Map {
        self.root
            .with(|root| transform::flatten(root, delimiter, prefix))
    }

    /// Returns a copy of the root with its entries ordered by key
    pub fn sort(&self) -> Map {
        self.root.with(transform::sort)
    }

    /// Returns a copy of the root with every nested map ordered by key
    pub fn sort_recursive(&self) -> Map {
        self.root.with(transform::sort_recursive)
    }

    /// Serializes the whole tree as JSON
    pub fn to_json(&self, options: JsonOptions) -> crate::Result<String> {
        Ok(self.root.with(|root| options.to_string(root))?)
    }

    /// Serializes the value at `path` as JSON; a missing path is `null`
    pub fn to_json_at(&self, path: impl AsRef<Path>, options: JsonOptions) -> crate::Result<String> {
        Ok(self.inspect(path, |value| options.to_string(value.unwrap_or(&Value::Null)))?)
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones are always owned snapshots, even of a shared tree.
impl Clone for PathTree {
    fn clone(&self) -> Self {
        Self {
            root: Root::Owned(self.all()),
            delimiter: self.delimiter.clone(),
        }
    }
}

impl PartialEq for PathTree {
    fn eq(&self, other: &Self) -> bool {
        if self.delimiter != other.delimiter {
            return false;
        }
        match (&self.root, &other.root) {
            (Root::Shared(a), Root::Shared(b)) if Rc::ptr_eq(a, b) => true,
            _ => self.with_items(|a| other.with_items(|b| a == b)),
        }
    }
}

impl fmt::Debug for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_items(|items| {
            f.debug_struct("PathTree")
                .field("items", items)
                .field("delimiter", &self.delimiter)
                .field("shared", &self.is_shared())
                .finish()
        })
    }
}

impl fmt::Display for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_items(|items| write!(f, "{items}"))
    }
}

impl FromStr for PathTree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl Serialize for PathTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_items(|items| items.serialize(serializer))
    }
}

impl<'de> Deserialize<'de> for PathTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl From<Map> for PathTree {
    fn from(items: Map) -> Self {
        Self::from_value(items)
    }
}

impl From<SharedMap> for PathTree {
    fn from(handle: SharedMap) -> Self {
        Self::shared(handle)
    }
}

impl From<&PathTree> for Value {
    fn from(tree: &PathTree) -> Self {
        Value::Map(tree.all())
    }
}

impl From<PathTree> for Value {
    fn from(tree: PathTree) -> Self {
        Value::Map(tree.into())
    }
}

impl From<PathTree> for Map {
    fn from(tree: PathTree) -> Self {
        match tree.root {
            Root::Owned(map) => map,
            Root::Shared(handle) => match Rc::try_unwrap(handle) {
                Ok(cell) => RefCell::into_inner(cell),
                Err(handle) => handle.borrow().clone(),
            },
        }
    }
}

impl From<&PathTree> for Map {
    fn from(tree: &PathTree) -> Self {
        tree.all()
    }
}

/// Iterates over a snapshot of the root entries.
impl IntoIterator for &PathTree {
    type Item = (Key, Value);
    type IntoIter = <Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.all().into_iter()
    }
}

impl IntoIterator for PathTree {
    type Item = (Key, Value);
    type IntoIter = <Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        Map::from(self).into_iter()
    }
}
