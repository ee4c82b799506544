//! Guarded writes and removal: add, push, pull.

use dotpath::{PathTree, Value};
use serde_json::json;

use crate::helpers::*;

// ===== ADD =====

#[test]
fn test_add_is_noop_when_set() {
    let mut tree = config_tree();
    let before = tree.all();

    tree.add("app.name", "other");
    tree.add("app.debug", true);
    assert_eq!(tree.all(), before);
}

#[test]
fn test_add_behaves_like_set_when_absent_or_null() {
    let mut added = tree(json!({"n": null}));
    let mut set = added.clone();

    added.add("n", 1).add("x.y", 2);
    set.set("n", 1).set("x.y", 2);
    assert_eq!(added, set);
}

#[test]
fn test_add_many() {
    let mut tree = tree(json!({"a": 1}));
    tree.add_many([("a", 10), ("b", 20), ("b", 30)]);

    assert_tree_eq(&tree, json!({"a": 1, "b": 20}));
}

#[test]
fn test_add_map_fills_missing_children() {
    let mut tree = config_tree();
    tree.add(
        "db",
        json!({"host": "db.internal", "port": 5432, "pool": {"max": 99, "idle": 30}}),
    );

    assert_eq!(tree.get("db.host"), Some(Value::from("localhost")));
    assert_eq!(tree.get("db.port"), Some(Value::Int(5432)));
    assert_eq!(tree.get("db.pool.max"), Some(Value::Int(10)));
    assert_eq!(tree.get("db.pool.idle"), Some(Value::Int(30)));
}

// ===== PUSH =====

#[test]
fn test_push_appends_to_list() {
    let mut tree = config_tree();
    tree.push("app.ports", 9000);

    assert_eq!(tree.get("app.ports"), Some(value(json!([8080, 8443, 9000]))));
}

#[test]
fn test_push_creates_list() {
    let mut tree = PathTree::new();
    tree.push("tags", "a").push("tags", "b").push("deep.list", 1);

    assert_tree_eq(&tree, json!({"tags": ["a", "b"], "deep": {"list": [1]}}));
}

#[test]
fn test_push_refuses_scalars_and_filled_maps() {
    let mut tree = config_tree();
    let before = tree.all();

    tree.push("app.name", "x").push("db", "x");
    assert_eq!(tree.all(), before);
}

#[test]
fn test_push_onto_index_written_map() {
    let mut tree = PathTree::new();
    tree.set("servers.0.host", "a").push("servers", json!({"host": "b"}));

    assert_eq!(tree.get("servers.1.host"), Some(Value::from("b")));
    assert_eq!(tree.count_at("servers"), 2);
}

#[test]
fn test_push_after_deleting_list_head() {
    let mut tree = crate::helpers::tree(json!({"l": [1, 2, 3]}));
    tree.delete("l.0");
    tree.push("l", 4);

    assert_eq!(tree.count_at("l"), 3);
    assert_eq!(tree.get("l.3"), Some(Value::Int(4)));
    assert_eq!(tree.get("l.1"), Some(Value::Int(2)));
}

#[test]
fn test_push_root() {
    let mut tree = PathTree::new();
    tree.push_root("first").push_root(json!({"second": true}));

    assert_eq!(tree.get("0"), Some(Value::from("first")));
    assert_eq!(tree.get("1.second"), Some(Value::Bool(true)));
}

// ===== PULL =====

#[test]
fn test_pull_returns_prior_value_and_removes() {
    let mut tree = config_tree();
    let prior = tree.get("db.pool");

    assert_eq!(tree.pull("db.pool"), prior);
    assert!(!tree.has("db.pool"));
    assert!(tree.has("db.host"));
}

#[test]
fn test_pull_or_default() {
    let mut tree = tree(json!({"a": 1}));

    assert_eq!(tree.pull_or("b", "none"), Value::from("none"));
    assert_eq!(tree.pull_or("a", "none"), Value::Int(1));
    assert!(tree.is_empty());
}

#[test]
fn test_pull_all_empties_tree() {
    let mut tree = config_tree();
    let expected = tree.all();

    assert_eq!(tree.pull_all(), expected);
    assert!(tree.is_empty());
    assert_eq!(tree.count(), 0);
}
