//! JSON output and serde integration.

use dotpath::{JsonOptions, PathTree, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_to_json_compact_and_pretty() {
    let tree = tree(json!({"a": {"b": [1, 2]}}));

    assert_eq!(tree.to_json(JsonOptions::default()).unwrap(), r#"{"a":{"b":[1,2]}}"#);
    assert_eq!(
        tree.to_json_at("a.b", JsonOptions::pretty().with_indent(2)).unwrap(),
        "[\n  1,\n  2\n]"
    );
}

#[test]
fn test_to_json_keeps_insertion_order() {
    let mut tree = PathTree::new();
    tree.set("z", 1).set("a", 2).set("m.0", "x");

    assert_eq!(
        tree.to_json(JsonOptions::default()).unwrap(),
        r#"{"z":1,"a":2,"m":{"0":"x"}}"#
    );
}

#[test]
fn test_integer_keyed_maps_stay_objects() {
    let tree = PathTree::from_value(vec![1, 2]);
    assert_eq!(tree.to_json(JsonOptions::default()).unwrap(), r#"{"0":1,"1":2}"#);
}

#[test]
fn test_serde_round_trip() {
    let tree = config_tree();
    let text = serde_json::to_string(&tree).unwrap();
    let back: PathTree = serde_json::from_str(&text).unwrap();

    assert_eq!(back, tree);
}

#[test]
fn test_serialize_inside_other_types() {
    #[derive(serde::Serialize)]
    struct Envelope<'a> {
        version: u32,
        data: &'a PathTree,
    }

    let tree = tree(json!({"k": "v"}));
    let out = serde_json::to_value(Envelope { version: 1, data: &tree }).unwrap();
    assert_eq!(out, json!({"version": 1, "data": {"k": "v"}}));
}

#[test]
fn test_non_finite_float_becomes_null() {
    let mut tree = PathTree::new();
    tree.set("x", f64::NAN);

    let json = serde_json::Value::from(&Value::Map(tree.all()));
    assert_eq!(json, json!({"x": null}));
}
