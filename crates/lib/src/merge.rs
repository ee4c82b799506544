//! Map merge strategies.
//!
//! Every strategy combines a target map with a source map, walking the
//! source in order. They differ in what happens on a key collision and in
//! how integer-keyed source entries are treated:
//!
//! | Strategy | Collision | Integer keys |
//! |---|---|---|
//! | [`Shallow`](MergeStrategy::Shallow) | source replaces target | appended |
//! | [`Replace`](MergeStrategy::Replace) | source replaces target | overwrite |
//! | [`Recursive`](MergeStrategy::Recursive) | maps recurse, other values accumulate | appended |
//! | [`RecursiveDistinct`](MergeStrategy::RecursiveDistinct) | maps recurse, source replaces target | overwrite |
//!
//! "Appended" means the source entry is stored under the target's next free
//! integer key instead of its own key, so integer-keyed entries never
//! collide.
//!
//! All strategies are total: they cannot fail on well-formed values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::value::{Key, Map, Value};

/// How two maps are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Later values replace earlier ones; no recursion
    #[default]
    Shallow,
    /// Like `Shallow`, but integer keys overwrite instead of appending
    Replace,
    /// Maps recurse, lists concatenate, colliding scalars accumulate into a list
    Recursive,
    /// Maps recurse, everything else is replaced by the later value.
    ///
    /// Colliding lists are replaced whole, not overwritten index by index.
    RecursiveDistinct,
}

impl MergeStrategy {
    /// Combines `source` into `target` and returns the result.
    ///
    /// ```
    /// # use dotpath::{MergeStrategy, Value};
    /// # use serde_json::json;
    /// let a = Value::from(json!({"a": {"b": 1}})).into_map();
    /// let b = Value::from(json!({"a": {"b": 2}})).into_map();
    ///
    /// let merged = MergeStrategy::Recursive.merge(a.clone(), b.clone());
    /// assert_eq!(Value::Map(merged), Value::from(json!({"a": {"b": [1, 2]}})));
    ///
    /// let merged = MergeStrategy::RecursiveDistinct.merge(a, b);
    /// assert_eq!(Value::Map(merged), Value::from(json!({"a": {"b": 2}})));
    /// ```
    pub fn merge(self, target: Map, source: Map) -> Map {
        match self {
            MergeStrategy::Shallow => merge_shallow(target, source),
            MergeStrategy::Replace => replace(target, source),
            MergeStrategy::Recursive => merge_recursive(target, source),
            MergeStrategy::RecursiveDistinct => merge_recursive_distinct(target, source),
        }
    }

    /// Returns the strategy name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Shallow => "shallow",
            MergeStrategy::Replace => "replace",
            MergeStrategy::Recursive => "recursive",
            MergeStrategy::RecursiveDistinct => "recursive_distinct",
        }
    }
}

fn merge_shallow(mut target: Map, source: Map) -> Map {
    for (key, value) in source {
        match key {
            Key::Index(_) => append(&mut target, value),
            key => {
                target.insert(key, value);
            }
        }
    }
    target
}

fn replace(mut target: Map, source: Map) -> Map {
    target.extend(source);
    target
}

fn merge_recursive(mut target: Map, source: Map) -> Map {
    for (key, value) in source {
        if key.is_index() {
            append(&mut target, value);
            continue;
        }
        let combined = match target.remove_in_place(&key) {
            Some(existing) => accumulate(existing, value),
            None => value,
        };
        target.insert(key, combined);
    }
    target
}

/// Appends under the next free integer key; dropped when none is left.
fn append(target: &mut Map, value: Value) {
    if target.push_back(value).is_none() {
        debug!("No free integer key left, skipping append");
    }
}

/// Combines two colliding values under the recursive strategy.
fn accumulate(existing: Value, incoming: Value) -> Value {
    match (existing, incoming) {
        (Value::Map(a), Value::Map(b)) => Value::Map(merge_recursive(a, b)),
        (Value::Map(mut a), incoming) => {
            for item in incoming.into_items() {
                append(&mut a, item);
            }
            Value::Map(a)
        }
        (existing, Value::Map(b)) => Value::Map(merge_recursive(existing.into_map(), b)),
        (existing, incoming) => {
            let mut items = existing.into_items();
            items.extend(incoming.into_items());
            Value::List(items)
        }
    }
}

fn merge_recursive_distinct(mut target: Map, source: Map) -> Map {
    for (key, value) in source {
        let combined = match (target.remove_in_place(&key), value) {
            (Some(Value::Map(a)), Value::Map(b)) => Value::Map(merge_recursive_distinct(a, b)),
            (_, value) => value,
        };
        target.insert(key, combined);
    }
    target
}

impl Map {
    /// Takes the value out of `key`, leaving null in its place so the entry
    /// keeps its position when reinserted.
    fn remove_in_place(&mut self, key: &Key) -> Option<Value> {
        self.get_mut(key).map(std::mem::take)
    }
}
