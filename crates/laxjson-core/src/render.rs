//! Inspection renderer: a tree as labelled, indented lines.
//!
//! This is a debug surface, not a JSON encoder. Output is line-oriented
//! (`Key:` / `Index:` / `Value:` labels, two spaces per nesting level) and
//! lossy: string payloads are emitted raw and unquoted, so the listing is
//! not re-parseable and no round-trip law applies to it.

use crate::value::Value;

const INDENT: &str = "  ";

/// Render an object or array tree as an indented listing.
///
/// Only containers produce output: a leaf value at the top level renders as
/// the empty string. Within a container, each entry emits a label line
/// (`Key: <key>` for objects, `Index: <n>` for arrays) followed by a
/// `Value: ` line carrying either the literal payload or, for a nested
/// container, a recursive listing one indent level deeper.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, 0, &mut out);
    out
}

fn render_into(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Object(members) => {
            for (key, child) in members {
                push_label_line(out, depth, "Key: ", key);
                push_entry_value(child, depth, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                push_label_line(out, depth, "Index: ", &index.to_string());
                push_entry_value(child, depth, out);
            }
        }
        _ => {}
    }
}

/// The `Value: ` line for one entry. Leaves finish the line with their
/// literal payload; containers finish it with a newline and recurse.
fn push_entry_value(child: &Value, depth: usize, out: &mut String) {
    push_indent(depth, out);
    out.push_str("Value: ");
    match child {
        Value::Null => {
            out.push_str("null");
            out.push('\n');
        }
        Value::Boolean(b) => {
            out.push_str(if *b { "true" } else { "false" });
            out.push('\n');
        }
        Value::Number(n) => {
            out.push_str(&n.to_string());
            out.push('\n');
        }
        Value::String(text) => {
            out.push_str(text);
            out.push('\n');
        }
        Value::Object(_) | Value::Array(_) => {
            out.push('\n');
            render_into(child, depth + 1, out);
        }
    }
}

fn push_label_line(out: &mut String, depth: usize, label: &str, text: &str) {
    push_indent(depth, out);
    out.push_str(label);
    out.push_str(text);
    out.push('\n');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
