//! Read-only commands: get, has, flatten, sort.

use dotpath::{Delimiter, PathTree, Value};

use super::Context;
use crate::{
    cli::{FlattenArgs, GetArgs, HasArgs, SortArgs},
    input::parse_value,
    output::{render, render_presence},
};

/// Looks up `path`, falling back to the parsed default. `None` means the
/// path is missing and no default was given.
pub fn get(tree: &PathTree, path: &str, default: Option<&str>) -> Option<Value> {
    tree.get(path).or_else(|| default.map(parse_value))
}

/// Checks each path; the second element is true when all are present
pub fn has(tree: &PathTree, paths: &[String]) -> (Vec<(String, bool)>, bool) {
    let results: Vec<(String, bool)> = paths.iter().map(|path| (path.clone(), tree.has(path))).collect();
    (results, tree.has_all(paths))
}

/// Flattens with an optional separator override
pub fn flatten(tree: &PathTree, separator: Option<&str>, prefix: &str) -> Value {
    let delimiter = separator.map_or_else(|| tree.delimiter().clone(), Delimiter::new);
    Value::Map(tree.flatten_with(&delimiter, prefix))
}

/// Sorts the document's keys, optionally at every level
pub fn sort(tree: &PathTree, recursive: bool) -> Value {
    if recursive {
        Value::Map(tree.sort_recursive())
    } else {
        Value::Map(tree.sort())
    }
}

/// Run the get command; returns false when nothing was found
pub fn run_get(args: &GetArgs, ctx: &Context) -> Result<bool, Box<dyn std::error::Error>> {
    let tree = ctx.load(&args.file)?;
    match get(&tree, &args.path, args.default.as_deref()) {
        Some(value) => {
            println!("{}", render(&value, ctx.format)?);
            Ok(true)
        }
        None => {
            eprintln!("not found: {}", args.path);
            Ok(false)
        }
    }
}

/// Run the has command; returns whether every path was present
pub fn run_has(args: &HasArgs, ctx: &Context) -> Result<bool, Box<dyn std::error::Error>> {
    let tree = ctx.load(&args.file)?;
    let (results, all_present) = has(&tree, &args.paths);
    println!("{}", render_presence(&results, ctx.format)?);
    Ok(all_present)
}

/// Run the flatten command
pub fn run_flatten(args: &FlattenArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let tree = ctx.load(&args.file)?;
    let flat = flatten(&tree, args.separator.as_deref(), &args.prefix);
    println!("{}", render(&flat, ctx.format)?);
    Ok(())
}

/// Run the sort command
pub fn run_sort(args: &SortArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let tree = ctx.load(&args.file)?;
    println!("{}", render(&sort(&tree, args.recursive), ctx.format)?);
    Ok(())
}
