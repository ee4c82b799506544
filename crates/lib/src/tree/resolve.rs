//! Path resolution over a root map.
//!
//! Reads walk the segments and stop at the first miss. Writes vivify every
//! intermediate segment that is missing or not a container. Reads and deletes
//! check the whole path as a literal top-level key before splitting it.

use crate::{
    path::{Delimiter, Path},
    value::{Key, Map, Value},
};

/// Resolves `path` for reading.
pub(crate) fn lookup<'a>(root: &'a Map, path: &Path, delimiter: &Delimiter) -> Option<&'a Value> {
    if let Some(value) = root.get(&path.literal_key()) {
        return Some(value);
    }
    if !path.is_nested(delimiter) {
        return None;
    }

    let mut segments = path.segments(delimiter);
    let first = segments.next()?;
    let mut current = root.get(&first)?;
    for segment in segments {
        current = current.child(&segment)?;
    }
    Some(current)
}

/// Resolves `path` for in-place modification, without vivifying anything.
pub(crate) fn lookup_mut<'a>(
    root: &'a mut Map,
    path: &Path,
    delimiter: &Delimiter,
) -> Option<&'a mut Value> {
    let literal = path.literal_key();
    if root.contains_key(&literal) {
        return root.get_mut(&literal);
    }
    if !path.is_nested(delimiter) {
        return None;
    }

    let mut segments = path.segments(delimiter);
    let first = segments.next()?;
    let mut current = root.get_mut(&first)?;
    for segment in segments {
        current = current.child_mut(&segment)?;
    }
    Some(current)
}

/// Writes `value` at `path`, creating intermediate containers as needed.
///
/// Any intermediate scalar is silently replaced by an empty map.
pub(crate) fn assign(root: &mut Map, path: &Path, delimiter: &Delimiter, value: Value) {
    let mut segments = path.segments(delimiter);
    // split() always yields at least one segment
    let Some(first) = segments.next() else {
        return;
    };
    let mut slot = root.slot(first);
    for segment in segments {
        slot = slot.slot(segment);
    }
    *slot = value;
}

/// Removes the value at `path`, returning it.
///
/// A missing intermediate segment makes this a no-op.
pub(crate) fn remove(root: &mut Map, path: &Path, delimiter: &Delimiter) -> Option<Value> {
    let literal = path.literal_key();
    if root.contains_key(&literal) {
        return root.remove(&literal);
    }

    let mut segments: Vec<Key> = path.segments(delimiter).collect();
    let last = segments.pop()?;
    let mut parents = segments.into_iter();
    let Some(first) = parents.next() else {
        return root.remove(&last);
    };

    let mut current = root.get_mut(&first)?;
    for segment in parents {
        current = current.child_mut(&segment)?;
    }
    current.remove_child(&last)
}
