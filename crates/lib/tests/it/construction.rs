//! Building trees: input casting, options, the parse flag, and typed access.

use dotpath::{Delimiter, Map, PathTree, TreeOptions, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_new_and_default_are_empty() {
    assert!(PathTree::new().is_empty());
    assert!(PathTree::default().is_empty());
    assert_eq!(PathTree::new().delimiter().as_str(), ".");
}

#[test]
fn test_construct_from_scalar_list_and_tree() {
    let scalar = PathTree::from_value(42);
    assert_eq!(scalar.get("0"), Some(Value::Int(42)));

    let list = PathTree::from_value(vec!["a", "b"]);
    assert_eq!(list.get("1"), Some(Value::from("b")));

    let original = config_tree();
    let copy = PathTree::from_value(&original);
    assert_eq!(copy, original);
}

#[test]
fn test_parse_flag() {
    let literal = tree(json!({"a.b": 1, "c": 2}));
    assert_eq!(literal.get("a.b"), Some(Value::Int(1)));
    assert!(!literal.has("a"));

    let parsed = PathTree::builder()
        .items(json!({"a.b": 1, "c": 2}))
        .parse(true)
        .build();
    assert_tree_eq(&parsed, json!({"a": {"b": 1}, "c": 2}));
}

#[test]
fn test_empty_delimiter_falls_back() {
    let tree = PathTree::builder().delimiter("").build();
    assert_eq!(tree.delimiter(), &Delimiter::default());
}

#[test]
fn test_options_from_config() {
    let options: TreeOptions = serde_json::from_str(r#"{"delimiter": "::", "parse": true}"#).unwrap();
    let tree = PathTree::with_options(json!({"a::b": 1}), options);

    assert_eq!(tree.get("a::b"), Some(Value::Int(1)));
    assert!(tree.get("a").is_some_and(|v| v.as_map().is_some()));
}

#[test]
fn test_from_json_and_from_str() {
    let tree = PathTree::from_json(r#"{"a": {"b": [1, 2]}}"#).unwrap();
    assert_eq!(tree.get("a.b.1"), Some(Value::Int(2)));

    let parsed: PathTree = r#"["x"]"#.parse().unwrap();
    assert_eq!(parsed.get("0"), Some(Value::from("x")));

    let err = PathTree::from_json("{not json").unwrap_err();
    assert!(err.is_construction_error());
}

#[test]
fn test_set_items_and_all() {
    let mut tree = config_tree();
    tree.set_items(json!({"only": true}));

    assert_tree_eq(&tree, json!({"only": true}));
    let all: Map = tree.all();
    assert_eq!(all.len(), 1);
}

#[test]
fn test_iteration_is_a_snapshot() {
    let tree = config_tree();
    let mut seen = Vec::new();
    for (key, value) in &tree {
        seen.push((key.to_string(), value.is_container()));
    }
    seen.sort();
    assert_eq!(seen, vec![("app".to_string(), true), ("db".to_string(), true)]);

    let owned: Vec<_> = tree.into_iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(owned.len(), 2);
}

// ===== TYPED ACCESS =====

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Pool {
    min: u32,
    max: u32,
}

#[test]
fn test_get_as() {
    let tree = config_tree();

    assert_eq!(tree.get_as::<String>("app.name").unwrap(), "demo");
    assert!(!tree.get_as::<bool>("app.debug").unwrap());
    assert_eq!(tree.get_as::<f64>("db.pool.max").unwrap(), 10.0);

    let err = tree.get_as::<i64>("app.name").unwrap_err();
    assert!(err.is_type_error());
    let err = tree.get_as::<i64>("app.missing").unwrap_err();
    assert_eq!(err.path(), Some("app.missing"));
}

#[test]
fn test_get_json_and_set_json() {
    let mut tree = config_tree();

    let pool: Pool = tree.get_json("db.pool").unwrap();
    assert_eq!(pool, Pool { min: 1, max: 10 });

    tree.set_json("db.replica", &Pool { min: 0, max: 2 }).unwrap();
    assert_eq!(tree.get("db.replica.max"), Some(Value::Int(2)));

    let err = tree.get_json::<Pool>("app").unwrap_err();
    assert!(err.is_serialization_error());
    let err = tree.get_json::<Pool>("nowhere").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "tree");
}

#[test]
fn test_from_serialize() {
    let tree = PathTree::from_serialize(&Pool { min: 3, max: 4 }).unwrap();
    assert_eq!(tree.get("min"), Some(Value::Int(3)));
}
