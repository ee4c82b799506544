//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use dotpath::{JsonOptions, Map, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders a value for printing.
///
/// Human output prints text without quotes and containers as indented
/// JSON. JSON output is always compact JSON.
pub fn render(value: &Value, format: OutputFormat) -> serde_json::Result<String> {
    match (format, value) {
        (OutputFormat::Human, Value::Text(text)) => Ok(text.clone()),
        (OutputFormat::Human, value) if value.is_container() => {
            value.to_json(JsonOptions::pretty().with_indent(2))
        }
        (OutputFormat::Human, value) => Ok(value.to_string()),
        (OutputFormat::Json, value) => value.to_json(JsonOptions::default()),
    }
}

/// Renders path presence, one `path: yes|no` line each or a JSON object
pub fn render_presence(results: &[(String, bool)], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(results
            .iter()
            .map(|(path, present)| format!("{path}: {}", if *present { "yes" } else { "no" }))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let map: Map = results.iter().map(|(path, present)| (path.as_str(), *present)).collect();
            Value::Map(map).to_json(JsonOptions::default())
        }
    }
}
