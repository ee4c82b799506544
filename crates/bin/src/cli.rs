//! CLI argument definitions for the dotpath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dotpath::MergeStrategy;

use crate::output::OutputFormat;

/// Merge strategy selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Strategy {
    /// Later values replace earlier ones (default)
    Shallow,
    /// Like shallow, but integer keys overwrite instead of appending
    Replace,
    /// Maps recurse and colliding values accumulate into lists
    Recursive,
    /// Maps recurse and colliding values are overwritten
    Distinct,
}

impl From<Strategy> for MergeStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Shallow => MergeStrategy::Shallow,
            Strategy::Replace => MergeStrategy::Replace,
            Strategy::Recursive => MergeStrategy::Recursive,
            Strategy::Distinct => MergeStrategy::RecursiveDistinct,
        }
    }
}

/// Read and edit JSON documents with delimited paths
#[derive(Parser, Debug)]
#[command(name = "dotpath")]
#[command(about = "dotpath: read, write and merge nested JSON with delimited paths")]
#[command(version)]
pub struct Cli {
    /// Separator between path segments
    #[arg(short, long, global = true, default_value = ".", env = "DOTPATH_DELIMITER")]
    pub delimiter: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Check that every path exists
    Has(HasArgs),
    /// Write a value at a path
    Set(SetArgs),
    /// Remove the values at one or more paths
    Delete(DeleteArgs),
    /// Append a value to the list at a path
    Push(PushArgs),
    /// Flatten the document into a single-level object
    Flatten(FlattenArgs),
    /// Merge another document into this one
    Merge(MergeArgs),
    /// Print the document with keys sorted
    Sort(SortArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// JSON document to read, or - for stdin
    pub file: PathBuf,

    /// Path to read
    pub path: String,

    /// Value to print when the path is missing (JSON, or a plain string)
    #[arg(long)]
    pub default: Option<String>,
}

/// Arguments for the has command
#[derive(clap::Args, Debug)]
pub struct HasArgs {
    /// JSON document to read, or - for stdin
    pub file: PathBuf,

    /// Paths that must all exist
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// JSON document to edit, or - for stdin
    pub file: PathBuf,

    /// Path to write
    pub path: String,

    /// Value to write (JSON, or a plain string)
    pub value: String,

    /// Rewrite the input file instead of printing the result
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the delete command
#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// JSON document to edit, or - for stdin
    pub file: PathBuf,

    /// Paths to remove
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Rewrite the input file instead of printing the result
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the push command
#[derive(clap::Args, Debug)]
pub struct PushArgs {
    /// JSON document to edit, or - for stdin
    pub file: PathBuf,

    /// Path of the list to append to
    pub path: String,

    /// Value to append (JSON, or a plain string)
    pub value: String,

    /// Rewrite the input file instead of printing the result
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// JSON document to read, or - for stdin
    pub file: PathBuf,

    /// Separator for the flattened keys; defaults to the path delimiter
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Prefix for every flattened key
    #[arg(short, long, default_value = "")]
    pub prefix: String,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// JSON document to merge into, or - for stdin
    pub file: PathBuf,

    /// JSON document to merge from
    pub other: PathBuf,

    /// Merge into the subtree at this path instead of the root
    #[arg(long)]
    pub at: Option<String>,

    /// How colliding keys are combined
    #[arg(short, long, value_enum, default_value = "shallow")]
    pub strategy: Strategy,

    /// Rewrite the input file instead of printing the result
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the sort command
#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// JSON document to read, or - for stdin
    pub file: PathBuf,

    /// Sort nested objects too
    #[arg(short, long)]
    pub recursive: bool,
}
