use dotpath::{Map, PathTree, Value};

// ==========================
// FIXTURES
// ==========================

/// Builds a tree from a `json!` literal
pub fn tree(json: serde_json::Value) -> PathTree {
    PathTree::from_value(json)
}

/// Converts a `json!` literal into a tree value
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Converts a `json!` object literal into a map
pub fn map(json: serde_json::Value) -> Map {
    Value::from(json).into_map()
}

/// A small configuration-shaped tree used across modules
pub fn config_tree() -> PathTree {
    tree(serde_json::json!({
        "app": {
            "name": "demo",
            "debug": false,
            "ports": [8080, 8443],
        },
        "db": {
            "host": "localhost",
            "pool": {"min": 1, "max": 10},
        },
    }))
}

// ==========================
// ASSERTIONS
// ==========================

/// Asserts the whole tree equals a `json!` literal, ignoring key order
pub fn assert_tree_eq(tree: &PathTree, expected: serde_json::Value) {
    assert_eq!(
        Value::Map(tree.all()),
        value(expected),
        "tree contents differ"
    );
}

/// Collects the top-level keys of a map in order, as strings
pub fn keys(map: &Map) -> Vec<String> {
    map.keys().map(ToString::to_string).collect()
}
