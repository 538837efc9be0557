use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// A filter node: a mapping from field-path strings to values.
///
/// Field paths are exact strings and may contain dots (`"phones.0"`).
/// A `BTreeMap` keeps iteration order stable, so rewritten trees come
/// out in a deterministic key order.
pub type Node = BTreeMap<String, Value>;

/// A value in a query tree.
///
/// This type represents every shape that can appear in a query
/// description or in a rewritten filter document: scalars, date leaves,
/// sequences, and nested filter nodes. Integers and floats are kept
/// distinct (unlike standard JSON which only has "number").
///
/// # Date leaves
///
/// [`Value::Date`] is an opaque leaf. The mapper never recurses into a
/// date and never expands it into a node, so a date used as a
/// comparison operand survives rewriting untouched.
///
/// # Examples
///
/// ```
/// use plainfilter::{Node, Value};
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let mut node = Node::new();
/// node.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(node);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null
    Null,

    /// Boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Date leaf (UTC instant), never recursed into
    Date(DateTime<Utc>),

    /// Sequence of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Nested filter node
    Object(Node),
}

impl Value {
    /// Get as a filter node, if this value is one
    pub fn as_object(&self) -> Option<&Node> {
        match self {
            Value::Object(node) => Some(node),
            _ => None,
        }
    }

}
