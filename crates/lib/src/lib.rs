//!
//! dotpath: delimited-path access to nested maps, lists, and scalars.
//!
//! This library lets callers read, write, merge, and delete deeply nested
//! values with a single path string such as `"server.hosts.0"` instead of
//! walking the structure by hand.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tagged union of null, scalars, lists, and ordered maps keyed by `value::Key`.
//! * **Paths (`path::Path`)**: Strings split on a configurable `path::Delimiter` into key segments. No escaping.
//! * **Trees (`tree::PathTree`)**: An owned or shared root map with path-addressed get/set/has/delete, guarded writes (`add`, `push`), and removal (`pull`).
//! * **Merges (`merge::MergeStrategy`)**: Shallow, replace, recursive (accumulating), and recursive-distinct (overwriting) map combination.
//! * **Transforms (`transform`)**: Flattening to a single-level map and key sorting.
//!
//! ```
//! use dotpath::{PathTree, Value};
//! use serde_json::json;
//!
//! let mut tree = PathTree::from_value(json!({"db": {"host": "localhost"}}));
//! tree.set("db.port", 5432);
//! tree.merge_recursive_distinct(json!({"db": {"host": "prod.internal"}}));
//!
//! assert_eq!(tree.get("db.host"), Some(Value::from("prod.internal")));
//! assert_eq!(tree.flatten().len(), 2);
//! ```

pub mod errors;
pub mod merge;
pub mod path;
pub mod transform;
pub mod tree;
pub mod value;

pub use errors::TreeError;
pub use merge::MergeStrategy;
pub use path::{Delimiter, Path, PathBuf};
pub use tree::{PathTree, SharedMap, TreeBuilder, TreeOptions};
pub use value::{JsonOptions, Key, Map, Value};

/// Result type used throughout the dotpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from tree operations
    #[error(transparent)]
    Tree(TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a path was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from building a tree.
    pub fn is_construction_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_construction_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Tree(tree_err) => tree_err.is_serialization_error(),
        }
    }
}
