//! Subcommand implementations.
//!
//! Each command splits into a pure step over a loaded [`PathTree`] and a
//! `run` wrapper that loads the input, prints or saves the result.

use std::path::Path;

use dotpath::{Delimiter, PathTree};

use crate::{
    input,
    output::{self, OutputFormat},
};

pub mod read;
pub mod write;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub delimiter: Delimiter,
    pub format: OutputFormat,
}

impl Context {
    /// Loads the input document with this context's delimiter
    pub fn load(&self, file: &Path) -> Result<PathTree, Box<dyn std::error::Error>> {
        input::load(file, &self.delimiter)
    }

    /// Prints a mutated document, or rewrites `file` when `write` is set
    pub fn finish(
        &self,
        file: &Path,
        tree: &PathTree,
        write: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if write {
            input::save(file, tree)
        } else {
            println!("{}", output::render(&tree.into(), self.format)?);
            Ok(())
        }
    }
}
