//! JSON output serialization for query trees.
//!
//! This module provides JSON serialization with support for both compact and
//! pretty-printed output formats. All output is deterministic (filter nodes
//! iterate in key order) and follows standard JSON formatting rules.
//!
//! # Features
//!
//! - **Compact output** via [`to_json()`] - minimal whitespace for efficient transmission
//! - **Pretty output** via [`to_json_pretty()`] - human-readable with 2-space indentation
//! - **String escaping** - handles special characters, control codes, and Unicode
//! - **Type preservation** - maintains distinction between integers and floats
//! - **Date leaves** - printed in the extended-JSON `{"$date": "..."}` form
//!
//! # Examples
//!
//! ```
//! use plainfilter::Value;
//! use plainfilter::output::{to_json, to_json_pretty};
//!
//! let value = Value::Integer(42);
//!
//! // Compact output
//! assert_eq!(to_json(&value), "42");
//!
//! // Pretty output (identical for simple values)
//! assert_eq!(to_json_pretty(&value), "42");
//! ```

use chrono::SecondsFormat;

use crate::value::{Node, Value};

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => {
                // Escape special characters
                format!("\"{}\"", self.escape_string(s))
            }
            Value::Date(dt) => self.print_date(dt, indent),
            Value::Array(arr) => self.print_array(arr, indent),
            Value::Object(node) => self.print_object(node, indent),
        }
    }

    fn print_date(&self, dt: &chrono::DateTime<chrono::Utc>, indent: usize) -> String {
        let stamp = dt.to_rfc3339_opts(SecondsFormat::Millis, true);
        if self.pretty {
            format!(
                "{{\n{}\"$date\": \"{}\"\n{}}}",
                self.indent(indent + 1),
                stamp,
                self.indent(indent)
            )
        } else {
            format!("{{\"$date\":\"{}\"}}", stamp)
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let mut result = "[\n".to_string();
            let items: Vec<String> = arr
                .iter()
                .map(|v| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push(']');
            result
        } else {
            let items: Vec<String> = arr.iter().map(|v| self.print_value(v, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(&self, node: &Node, indent: usize) -> String {
        if node.is_empty() {
            return "{}".to_string();
        }

        // BTreeMap iteration is already sorted, so output is deterministic
        if self.pretty {
            let mut result = "{\n".to_string();
            let items: Vec<String> = node
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push('}');
            result
        } else {
            let items: Vec<String> = node
                .iter()
                .map(|(k, v)| {
                    format!("\"{}\":{}", self.escape_string(k), self.print_value(v, indent))
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => {
                    // Unicode escape for control chars
                    format!("\\u{:04x}", c as u32).chars().collect()
                }
                c => vec![c],
            })
            .collect()
    }
}

// Convenience functions

/// Converts a Value to compact JSON string representation.
///
/// This function produces minified JSON output with no extra whitespace,
/// suitable for network transmission or storage where space is a concern.
///
/// # Examples
///
/// ```
/// use plainfilter::{Node, Value};
/// use plainfilter::output::to_json;
///
/// let mut node = Node::new();
/// node.insert("name".to_string(), Value::String("Alice".to_string()));
/// node.insert("age".to_string(), Value::Integer(30));
///
/// let json = to_json(&Value::Object(node));
/// assert_eq!(json, r#"{"age":30,"name":"Alice"}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a Value to pretty-printed JSON string representation.
///
/// This function produces human-readable JSON output with 2-space indentation,
/// suitable for debugging, logging, or user-facing output.
///
/// # Examples
///
/// ```
/// use plainfilter::{Node, Value};
/// use plainfilter::output::to_json_pretty;
///
/// let mut node = Node::new();
/// node.insert("name".to_string(), Value::String("Alice".to_string()));
/// node.insert("age".to_string(), Value::Integer(30));
///
/// let json = to_json_pretty(&Value::Object(node));
/// // Output:
/// // {
/// //   "age": 30,
/// //   "name": "Alice"
/// // }
/// ```
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}
