//! Loading and saving documents, and parsing command-line values.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use dotpath::{Delimiter, JsonOptions, PathTree, TreeOptions, Value};

/// The file name that stands for stdin
pub const STDIN: &str = "-";

/// Returns true if `file` names stdin
pub fn is_stdin(file: &Path) -> bool {
    file.as_os_str() == STDIN
}

/// Reads a JSON document from a file or stdin into a tree
pub fn load(file: &Path, delimiter: &Delimiter) -> Result<PathTree, Box<dyn std::error::Error>> {
    let text = if is_stdin(file) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(file)?
    };
    tracing::debug!(file = %file.display(), bytes = text.len(), "Loaded document");

    let items = PathTree::from_json(&text)?;
    let options = TreeOptions::default().with_delimiter(delimiter.clone());
    Ok(PathTree::with_options(items, options))
}

/// Writes a tree back to `file` as indented JSON
pub fn save(file: &Path, tree: &PathTree) -> Result<(), Box<dyn std::error::Error>> {
    if is_stdin(file) {
        return Err("cannot --write when reading from stdin".into());
    }
    let mut json = tree.to_json(JsonOptions::pretty().with_indent(2))?;
    json.push('\n');
    fs::write(file, json)?;
    tracing::debug!(file = %file.display(), "Saved document");
    Ok(())
}

/// Parses a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw))
}
