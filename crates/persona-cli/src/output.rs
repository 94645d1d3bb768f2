//! Output formatting utilities

use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text or table
    Text,
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Render a single item in a machine-readable format.
///
/// `Text` falls back to JSON; callers handle their own text rendering.
pub fn render<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text | OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

/// Render a list of rows, as a table for `Text`.
pub fn render_rows<T: Serialize + Tabled>(rows: Vec<T>, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text if rows.is_empty() => Ok("No results".dimmed().to_string()),
        OutputFormat::Text => Ok(Table::new(rows).to_string()),
        other => render(&rows, other),
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        key: String,
        name: String,
    }

    fn rows() -> Vec<Row> {
        vec![Row {
            key: "wild-dreamer".into(),
            name: "Wild Dreamer".into(),
        }]
    }

    #[test]
    fn json_rows() {
        let out = render_rows(rows(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["key"], "wild-dreamer");
    }

    #[test]
    fn yaml_rows() {
        let out = render_rows(rows(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("key: wild-dreamer"));
    }

    #[test]
    fn text_rows_render_table() {
        let out = render_rows(rows(), OutputFormat::Text).unwrap();
        assert!(out.contains("Wild Dreamer"));
        assert!(out.contains("key"));
    }
}
