//! Path resolution through the public tree API: reads, writes, deletes,
//! and the literal-key precedence for reads and deletes.

use dotpath::{PathTree, Value};
use serde_json::json;

use crate::helpers::*;

// ===== READS =====

#[test]
fn test_get_nested_and_missing() {
    let tree = config_tree();

    assert_eq!(tree.get("app.name"), Some(Value::from("demo")));
    assert_eq!(tree.get("db.pool.max"), Some(Value::Int(10)));
    assert_eq!(tree.get("app.ports.1"), Some(Value::Int(8443)));
    assert_eq!(tree.get("app.ports.2"), None);
    assert_eq!(tree.get("app.name.first"), None);
    assert_eq!(tree.get("nope"), None);
}

#[test]
fn test_get_or_default_only_when_missing() {
    let tree = tree(json!({"a": null, "b": false}));

    assert_eq!(tree.get_or("a", "fallback"), Value::Null);
    assert_eq!(tree.get_or("b", true), Value::Bool(false));
    assert_eq!(tree.get_or("c.d", "fallback"), Value::from("fallback"));
}

#[test]
fn test_get_prefers_literal_top_level_key() {
    let tree = tree(json!({"a.b": "literal", "a": {"b": "nested"}}));

    assert_eq!(tree.get("a.b"), Some(Value::from("literal")));
    // Only the top level is checked literally
    let deeper = crate::helpers::tree(json!({"x": {"a.b": 1}}));
    assert_eq!(deeper.get("x.a.b"), None);
}

#[test]
fn test_has_counts_stored_null() {
    let tree = tree(json!({"a": {"b": null}}));

    assert!(tree.has("a"));
    assert!(tree.has("a.b"));
    assert!(!tree.has("a.b.c"));
}

#[test]
fn test_has_all() {
    let tree = config_tree();

    assert!(tree.has_all(["app.name", "db.host"]));
    assert!(!tree.has_all(["app.name", "db.user"]));
    assert!(!tree.has_all(Vec::<&str>::new()));
    assert!(!PathTree::new().has_all([""]));
}

#[test]
fn test_custom_delimiter() {
    let mut tree = PathTree::builder().delimiter("/").build();
    tree.set("a/b.c/d", 1);

    assert_tree_eq(&tree, json!({"a": {"b.c": {"d": 1}}}));
    assert_eq!(tree.get("a/b.c/d"), Some(Value::Int(1)));
    assert_eq!(tree.get("a.b"), None);
}

#[test]
fn test_empty_segments_are_keys() {
    let mut tree = PathTree::new();
    tree.set("a..b", 1);

    assert_tree_eq(&tree, json!({"a": {"": {"b": 1}}}));
    assert!(tree.has("a..b"));
}

// ===== WRITES =====

#[test]
fn test_set_then_get_round_trips() {
    let mut tree = PathTree::new();
    let cases = [
        ("a", value(json!(1))),
        ("b.c", value(json!("text"))),
        ("d.e.f", value(json!([1, {"g": null}]))),
        ("h", value(json!({"i": {"j": 2.5}}))),
        ("k.0", value(json!(true))),
    ];
    for (path, v) in cases {
        tree.set(path, v.clone());
        assert_eq!(tree.get(path), Some(v), "round trip through {path}");
    }
}

#[test]
fn test_set_overwrites_scalar_intermediate() {
    let mut tree = PathTree::new();
    tree.set("a", 5);
    tree.set("a.b", 1);

    assert_eq!(tree.get("a"), Some(value(json!({"b": 1}))));
}

#[test]
fn test_set_through_lists() {
    let mut tree = tree(json!({"list": ["a", "b"]}));

    tree.set("list.1", "B");
    tree.set("list.2", "c");
    assert_eq!(tree.get("list"), Some(value(json!(["a", "B", "c"]))));

    // A name key cannot live in a list, so the list becomes a map
    tree.set("list.extra", true);
    assert_tree_eq(
        &tree,
        json!({"list": {"0": "a", "1": "B", "2": "c", "extra": true}}),
    );
}

#[test]
fn test_set_many_later_entries_win() {
    let mut tree = PathTree::new();
    tree.set_many([("a.b", 1), ("a.c", 2), ("a.b", 3)]);

    assert_tree_eq(&tree, json!({"a": {"b": 3, "c": 2}}));
}

#[test]
fn test_set_splits_even_when_literal_key_exists() {
    let mut tree = tree(json!({"a.b": "literal"}));
    tree.set("a.b", "nested");

    assert_tree_eq(&tree, json!({"a.b": "literal", "a": {"b": "nested"}}));
}

// ===== DELETES =====

#[test]
fn test_delete_then_has_is_false() {
    let mut tree = config_tree();

    assert_eq!(tree.delete("db.pool.min"), Some(Value::Int(1)));
    assert!(!tree.has("db.pool.min"));
    assert!(tree.has("db.pool.max"));
}

#[test]
fn test_delete_missing_intermediate_is_noop() {
    let mut tree = tree(json!({"a": 1}));

    assert_eq!(tree.delete("x.y.z"), None);
    assert_eq!(tree.delete("a.b"), None);
    assert_tree_eq(&tree, json!({"a": 1}));
}

#[test]
fn test_delete_literal_key_first() {
    let mut tree = tree(json!({"a.b": 1, "a": {"b": 2}}));

    tree.delete("a.b");
    assert_tree_eq(&tree, json!({"a": {"b": 2}}));
    tree.delete("a.b");
    assert_tree_eq(&tree, json!({"a": {}}));
}

#[test]
fn test_delete_list_elements_keeps_indices() {
    let mut tree = tree(json!({"l": ["a", "b", "c"]}));

    tree.delete("l.2");
    assert_eq!(tree.get("l"), Some(value(json!(["a", "b"]))));

    tree.delete("l.0");
    assert_eq!(tree.get("l.1"), Some(Value::from("b")));
    assert!(!tree.has("l.0"));
}

#[test]
fn test_delete_many() {
    let mut tree = config_tree();
    tree.delete_many(["app", "db.pool", "missing"]);

    assert_tree_eq(&tree, json!({"db": {"host": "localhost"}}));
}

// ===== CLEAR =====

#[test]
fn test_clear_sets_empty_map() {
    let mut tree = config_tree();
    tree.clear("db").clear("new.branch");

    assert_eq!(tree.get("db"), Some(value(json!({}))));
    assert_eq!(tree.get("new.branch"), Some(value(json!({}))));
    assert!(tree.has("app.name"));
}

#[test]
fn test_clear_many_and_all() {
    let mut tree = config_tree();
    tree.clear_many(["app.ports", "db.pool"]);
    assert_eq!(tree.count_at("app.ports"), 0);
    assert_eq!(tree.count_at("db.pool"), 0);

    tree.clear_all();
    assert!(tree.is_empty());
}

// ===== QUERIES =====

#[test]
fn test_count_at() {
    let tree = tree(json!({"l": [1, 2, 3], "m": {"a": 1}, "s": "x", "n": null}));

    assert_eq!(tree.count(), 4);
    assert_eq!(tree.count_at("l"), 3);
    assert_eq!(tree.count_at("m"), 1);
    assert_eq!(tree.count_at("s"), 1);
    assert_eq!(tree.count_at("n"), 0);
    assert_eq!(tree.count_at("missing"), 0);
}

#[test]
fn test_is_empty_at_blank_values() {
    let tree = tree(json!({
        "zero": 0, "off": false, "blank": "", "zero_text": "0",
        "list": [], "map": {}, "null": null, "set": "value"
    }));

    for path in ["zero", "off", "blank", "zero_text", "list", "map", "null", "missing"] {
        assert!(tree.is_empty_at(path), "{path} should be empty");
    }
    assert!(!tree.is_empty_at("set"));
    assert!(tree.is_empty_all(["zero", "missing"]));
    assert!(!tree.is_empty_all(["zero", "set"]));
    assert!(!tree.is_empty());
}
