#![forbid(unsafe_code)]

//! PHP array literal rendering
//!
//! Renders option values with short array syntax, one entry per line,
//! trailing commas, single-quoted strings:
//!
//! ```text
//! [
//!     '@Laravel' => [
//!         '@PSR2' => true,
//!         'array_syntax' => [
//!             'syntax' => 'short',
//!         ],
//!     ],
//! ]
//! ```
//!
//! The first line carries no indentation so the literal can follow `=` on
//! the line of the declaration it is assigned to.

use crate::engine::OutputDocument;
use serde_json::Value;

/// Render the translated document as a PHP array literal
pub fn render_literal(doc: &OutputDocument, indent: &str) -> String {
    render_value(&doc.to_value(), indent)
}

/// Render any option value as a PHP expression
pub fn render_value(value: &Value, indent: &str) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: &str, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for item in items {
                push_indent(out, indent, depth + 1);
                write_value(out, item, indent, depth + 1);
                out.push_str(",\n");
            }
            push_indent(out, indent, depth);
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("[\n");
            for (key, item) in map {
                push_indent(out, indent, depth + 1);
                out.push_str(&quote(key));
                out.push_str(" => ");
                write_value(out, item, indent, depth + 1);
                out.push_str(",\n");
            }
            push_indent(out, indent, depth);
            out.push(']');
        }
    }
}

fn push_indent(out: &mut String, indent: &str, depth: usize) {
    for _ in 0..depth {
        out.push_str(indent);
    }
}

/// Quote a string as a PHP single-quoted literal
pub fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
