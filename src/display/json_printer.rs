//! Colorized JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in cyan
//! - Strings in green
//! - Numbers in yellow
//! - Booleans in magenta
//! - Null in red

use colored::Colorize;
use serde_json::{Map, Value};

/// Print a JSON value with colorized syntax highlighting.
///
/// Renders the value with 2-space indentation and ANSI color codes.
/// When `use_color` is false, outputs plain JSON without colors
/// (suitable for machine consumption or piping).
pub fn print_json(value: &Value, use_color: bool) {
    if use_color {
        println!("{}", render(value, 0));
    } else {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{value}"),
        }
    }
}

/// Render a value at the given nesting depth.
fn render(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".red().to_string(),
        Value::Bool(b) => b.to_string().magenta().to_string(),
        Value::Number(n) => n.to_string().yellow().to_string(),
        Value::String(s) => quoted(s).green().to_string(),
        Value::Array(items) => render_array(items, depth),
        Value::Object(map) => render_object(map, depth),
    }
}

fn render_array(items: &[Value], depth: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let inner_indent = "  ".repeat(depth + 1);
    let entries: Vec<String> = items
        .iter()
        .map(|item| format!("{inner_indent}{}", render(item, depth + 1)))
        .collect();
    format!("[\n{}\n{}]", entries.join(",\n"), "  ".repeat(depth))
}

fn render_object(map: &Map<String, Value>, depth: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    let inner_indent = "  ".repeat(depth + 1);
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            format!(
                "{inner_indent}{}: {}",
                quoted(key).cyan(),
                render(value, depth + 1)
            )
        })
        .collect();
    format!("{{\n{}\n{}}}", entries.join(",\n"), "  ".repeat(depth))
}

/// Quote and escape a string the way JSON output does.
fn quoted(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}
