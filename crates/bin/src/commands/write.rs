//! Mutating commands: set, delete, push, merge.

use dotpath::{MergeStrategy, PathTree};

use super::Context;
use crate::{
    cli::{DeleteArgs, MergeArgs, PushArgs, SetArgs},
    input::parse_value,
};

/// Merges `other` into `tree`, at the root or at `at`
pub fn merge(tree: &mut PathTree, other: &PathTree, at: Option<&str>, strategy: MergeStrategy) {
    match at {
        Some(path) => tree.merge_at_with(strategy, path, other),
        None => tree.merge_with(strategy, other),
    };
}

/// Run the set command
pub fn run_set(args: &SetArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = ctx.load(&args.file)?;
    tree.set(&args.path, parse_value(&args.value));
    ctx.finish(&args.file, &tree, args.write)
}

/// Run the delete command
pub fn run_delete(args: &DeleteArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = ctx.load(&args.file)?;
    tree.delete_many(&args.paths);
    ctx.finish(&args.file, &tree, args.write)
}

/// Run the push command
pub fn run_push(args: &PushArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = ctx.load(&args.file)?;
    tree.push(&args.path, parse_value(&args.value));
    ctx.finish(&args.file, &tree, args.write)
}

/// Run the merge command
pub fn run_merge(args: &MergeArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = ctx.load(&args.file)?;
    let other = ctx.load(&args.other)?;
    merge(&mut tree, &other, args.at.as_deref(), args.strategy.into());
    ctx.finish(&args.file, &tree, args.write)
}
