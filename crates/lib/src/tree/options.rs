//! Construction options and the tree builder.

use serde::{Deserialize, Serialize};

use super::PathTree;
use crate::{path::Delimiter, value::Value};

/// Options controlling how a [`PathTree`] is built.
///
/// Deserializable so it can be loaded from configuration; missing fields take
/// their defaults.
///
/// ```
/// # use dotpath::TreeOptions;
/// let options: TreeOptions = serde_json::from_str(r#"{"delimiter": "/"}"#).unwrap();
/// assert_eq!(options.delimiter.as_str(), "/");
/// assert!(!options.parse);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Separator between path segments
    pub delimiter: Delimiter,
    /// Treat each top-level key of the initial items as a path
    pub parse: bool,
}

impl TreeOptions {
    /// Builder method to set the delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Builder method to set the parse flag
    pub fn with_parse(mut self, parse: bool) -> Self {
        self.parse = parse;
        self
    }
}

/// Fluent builder for [`PathTree`].
///
/// ```
/// # use dotpath::{PathTree, Value};
/// # use serde_json::json;
/// let tree = PathTree::builder()
///     .items(json!({"foo_bar": "baz"}))
///     .delimiter("_")
///     .parse(true)
///     .build();
/// assert_eq!(tree.get("foo_bar"), Some(Value::from("baz")));
/// assert!(tree.get("foo").unwrap().as_map().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    items: Value,
    options: TreeOptions,
}

impl TreeBuilder {
    /// Creates a builder with no items and default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial items
    pub fn items(mut self, items: impl Into<Value>) -> Self {
        self.items = items.into();
        self
    }

    /// Sets the path delimiter; an empty delimiter falls back to `"."`
    pub fn delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.options.delimiter = delimiter.into();
        self
    }

    /// Sets whether top-level keys of the items are parsed as paths
    pub fn parse(mut self, parse: bool) -> Self {
        self.options.parse = parse;
        self
    }

    /// Replaces all options at once
    pub fn options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the tree
    pub fn build(self) -> PathTree {
        PathTree::with_options(self.items, self.options)
    }
}
