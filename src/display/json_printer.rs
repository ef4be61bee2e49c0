//! Colorized JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in cyan
//! - Strings in green
//! - Numbers in yellow
//! - Booleans in magenta
//! - Null in red

use std::fmt::Write;

use serde_json::{Map, Value};

use super::{Style, paint};

const INDENT: &str = "  ";

/// Print a JSON object with colorized syntax highlighting.
///
/// Renders the value with 2-space indentation and ANSI color codes.
/// When `use_color` is false, outputs plain JSON without colors
/// (suitable for machine consumption or piping).
pub fn print_json(object: &Map<String, Value>, use_color: bool) {
    println!("{}", render_object(object, use_color));
}

/// Render a JSON object the way [`print_json`] prints it.
pub fn render_object(object: &Map<String, Value>, use_color: bool) -> String {
    let mut out = String::new();
    write_object(&mut out, object, 0, use_color);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, color: bool) {
    match value {
        Value::Object(map) => write_object(out, map, depth, color),
        Value::Array(items) => write_array(out, items, depth, color),
        Value::String(_) => out.push_str(&paint(&value.to_string(), Style::Green, color)),
        Value::Number(n) => out.push_str(&paint(&n.to_string(), Style::Yellow, color)),
        Value::Bool(b) => out.push_str(&paint(&b.to_string(), Style::Magenta, color)),
        Value::Null => out.push_str(&paint("null", Style::Red, color)),
    }
}

fn write_object(out: &mut String, map: &Map<String, Value>, depth: usize, color: bool) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    for (i, (key, value)) in map.iter().enumerate() {
        push_indent(out, depth + 1);
        // Keys are re-escaped through serde_json so control characters stay inert.
        let key = Value::String(key.clone()).to_string();
        let _ = write!(out, "{}: ", paint(&key, Style::Cyan, color));
        write_value(out, value, depth + 1, color);
        if i + 1 < map.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(out, depth);
    out.push('}');
}

fn write_array(out: &mut String, items: &[Value], depth: usize, color: bool) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        push_indent(out, depth + 1);
        write_value(out, item, depth + 1, color);
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(out, depth);
    out.push(']');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
