//! Whole-tree transforms: flattening and key sorting.

use std::cmp::Ordering;

use crate::{
    path::{Delimiter, PathBuf},
    value::{Key, Map, Value},
};

/// Flattens `items` into a single-level map.
///
/// Every leaf is rekeyed to `prefix` followed by its segments joined with
/// `delimiter`. Scalars, null, and empty containers are leaves; only
/// non-empty maps and lists are expanded.
///
/// ```
/// # use dotpath::{Delimiter, Value, transform::flatten};
/// # use serde_json::json;
/// let items = Value::from(json!({"foo": {"abc": "xyz", "bar": ["baz"]}})).into_map();
/// let flat = flatten(&items, &Delimiter::default(), "");
/// assert_eq!(
///     Value::Map(flat),
///     Value::from(json!({"foo.abc": "xyz", "foo.bar.0": "baz"}))
/// );
/// ```
pub fn flatten(items: &Map, delimiter: &Delimiter, prefix: &str) -> Map {
    let mut out = Map::new();
    let base = PathBuf::from(prefix);
    for (key, value) in items {
        flatten_into(&mut out, prefixed(&base, key), value, delimiter);
    }
    out
}

/// The prefix is glued to the first segment without a delimiter.
fn prefixed(base: &PathBuf, key: &Key) -> PathBuf {
    PathBuf::from(format!("{base}{key}"))
}

fn flatten_into(out: &mut Map, path: PathBuf, value: &Value, delimiter: &Delimiter) {
    match value {
        Value::Map(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(out, path.join(key, delimiter), child, delimiter);
            }
        }
        Value::List(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(out, path.join(&Key::Index(index), delimiter), child, delimiter);
            }
        }
        leaf => {
            out.insert(path.into_string(), leaf.clone());
        }
    }
}

/// Compares keys of a map that is not list-shaped: by their string form.
fn lexicographic(a: &Key, b: &Key) -> Ordering {
    match (a, b) {
        (Key::Name(a), Key::Name(b)) => a.cmp(b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// Orders the entries of `map` by key.
///
/// A list-shaped map (keys exactly `0..len`) is ordered numerically, any
/// other map lexicographically by the keys' string form.
fn sort_keys(map: &mut Map) {
    if map.is_list_shaped() {
        map.sort_by(|a, b| a.as_index().cmp(&b.as_index()));
    } else {
        map.sort_by(lexicographic);
    }
}

/// Returns a copy of `map` with its top-level entries ordered by key.
pub fn sort(map: &Map) -> Map {
    let mut sorted = map.clone();
    sort_keys(&mut sorted);
    sorted
}

/// Returns a copy of `map` with every nested map ordered by key,
/// innermost first. Lists keep their element order but their elements are
/// sorted too.
pub fn sort_recursive(map: &Map) -> Map {
    let mut sorted: Map = map
        .iter()
        .map(|(key, value)| (key.clone(), sort_value_recursive(value)))
        .collect();
    sort_keys(&mut sorted);
    sorted
}

fn sort_value_recursive(value: &Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(sort_recursive(map)),
        Value::List(items) => Value::List(items.iter().map(sort_value_recursive).collect()),
        leaf => leaf.clone(),
    }
}
