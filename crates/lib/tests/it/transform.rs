//! Flattening and sorting through the tree API.

use dotpath::{Delimiter, Map, PathTree, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_flatten_default() {
    let tree = tree(json!({"foo": {"abc": "xyz", "bar": ["baz"]}}));

    assert_eq!(
        Value::Map(tree.flatten()),
        value(json!({"foo.abc": "xyz", "foo.bar.0": "baz"}))
    );
}

#[test]
fn test_flatten_uses_tree_delimiter() {
    let tree = PathTree::builder()
        .items(json!({"a": {"b": 1}}))
        .delimiter("/")
        .build();

    assert_eq!(keys(&tree.flatten()), vec!["a/b"]);
}

#[test]
fn test_flatten_with_prefix_and_separator() {
    let tree = config_tree();
    let flat = tree.flatten_with(&Delimiter::new("_"), "CFG_");

    assert_eq!(flat.get(&"CFG_db_pool_max".into()), Some(&Value::Int(10)));
    assert_eq!(flat.get(&"CFG_app_ports_1".into()), Some(&Value::Int(8443)));
    assert_eq!(flat.len(), 7);
}

#[test]
fn test_flatten_keeps_empty_containers() {
    let tree = tree(json!({"a": {}, "b": {"c": []}}));

    assert_eq!(Value::Map(tree.flatten()), value(json!({"a": {}, "b.c": []})));
}

#[test]
fn test_flatten_then_parse_restores_tree() {
    let original = config_tree();
    let rebuilt = PathTree::builder()
        .items(original.flatten())
        .parse(true)
        .build();

    // lists come back as integer-keyed maps
    assert_eq!(rebuilt.get("app.ports.0"), Some(Value::Int(8080)));
    assert_eq!(rebuilt.get("db.pool"), original.get("db.pool"));
}

#[test]
fn test_sort_orders_top_level_only() {
    let inner: Map = [("z", 1), ("y", 2)].into_iter().collect();
    let mut tree = PathTree::new();
    tree.set("b", 1).set("a", Value::Map(inner)).set("c", 3);

    let sorted = tree.sort();
    assert_eq!(keys(&sorted), vec!["a", "b", "c"]);
    let nested = sorted.get(&"a".into()).and_then(Value::as_map).unwrap();
    assert_eq!(keys(nested), vec!["z", "y"]);

    // sorting returns a copy
    assert_eq!(keys(&tree.all()), vec!["b", "a", "c"]);
}

#[test]
fn test_sort_recursive_orders_every_level() {
    let inner: Map = [("z", 1), ("y", 2)].into_iter().collect();
    let mut tree = PathTree::new();
    tree.set("b", Value::Map(inner)).set("a", 1);

    let sorted = tree.sort_recursive();
    assert_eq!(keys(&sorted), vec!["a", "b"]);
    let nested = sorted.get(&"b".into()).and_then(Value::as_map).unwrap();
    assert_eq!(keys(nested), vec!["y", "z"]);
}

#[test]
fn test_sort_list_shaped_numerically() {
    let mut tree = PathTree::new();
    for i in [2usize, 10, 0, 1, 3, 4, 5, 6, 7, 8, 9] {
        tree.set(i.to_string(), i as i64);
    }

    let expected: Vec<String> = (0..=10).map(|i| i.to_string()).collect();
    assert_eq!(keys(&tree.sort()), expected);
}
