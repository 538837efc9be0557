//! Rewrites a friendly-dialect query description into a canonical
//! MongoDB-style filter document, extracting element-match clauses into
//! a separate projection document along the way.
//!
//! The rewrite is a single depth-first pass driven by the operator
//! tables in [`crate::operators`]. It is total: keys that match no
//! table and values of unexpected shape pass through unchanged, and
//! nothing is ever rejected. The caller's tree is never touched; both
//! output trees are built fresh on every call.

use crate::{
    operators::{
        comparison_symbol, is_raw_clause, logical_symbol, projection_symbol, CONTAINS_ELEMENT,
        ELEM_MATCH,
    },
    value::{Node, Value},
};

/// The pair of documents produced by [`translate`].
///
/// `query` and `projection` never share a field-path key: a field whose
/// clause was extracted into `projection` is absent from `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// The filter document, with comparison and logical operators
    /// rewritten to their canonical symbols.
    pub query: Value,

    /// Element-match clauses extracted from top-level fields, keyed by
    /// the same field path they had in the input.
    pub projection: Value,
}

/// Translates a query description into a `{query, projection}` pair.
///
/// The input is read, never modified; both returned trees are owned by
/// the caller. There are no error conditions: unrecognized keys and
/// oddly shaped values are carried over as-is.
///
/// # Examples
///
/// ```
/// use plainfilter::{translate, Node, Value};
///
/// let mut clause = Node::new();
/// clause.insert("notEqualTo".to_string(), Value::String("Doe".to_string()));
/// let mut description = Node::new();
/// description.insert("lastName".to_string(), Value::Object(clause));
///
/// let result = translate(&Value::Object(description));
///
/// let mut rewritten = Node::new();
/// rewritten.insert("$ne".to_string(), Value::String("Doe".to_string()));
/// let mut query = Node::new();
/// query.insert("lastName".to_string(), Value::Object(rewritten));
///
/// assert_eq!(result.query, Value::Object(query));
/// assert_eq!(result.projection, Value::Object(Node::new()));
/// ```
pub fn translate(description: &Value) -> Translation {
    match description.clone() {
        Value::Object(node) => {
            let (kept, projection) = split_projection(node);
            Translation {
                query: Value::Object(rewrite_node(kept)),
                projection: Value::Object(projection),
            }
        }
        // Not a filter node at all; rewrite best-effort and hand back
        // an empty projection.
        other => Translation {
            query: rewrite_value(other),
            projection: Value::Object(Node::new()),
        },
    }
}

/// Splits the top level of a description into the fields kept in the
/// query tree and the element-match clauses moved to the projection
/// tree.
///
/// Extraction triggers on the friendly clause name only, so a document
/// already carrying `$elemMatch` is left alone. It is also a top-level
/// behavior only: deeper element-match clauses are renamed in place by
/// [`rewrite_node`] but stay in the query tree.
fn split_projection(node: Node) -> (Node, Node) {
    let mut kept = Node::new();
    let mut projection = Node::new();

    for (key, value) in node {
        if is_raw_clause(&key) {
            kept.insert(key, value);
            continue;
        }
        match value {
            Value::Object(mut child) => {
                if let Some(inner) = child.remove(CONTAINS_ELEMENT) {
                    // The whole field moves: the projection gets a
                    // single-clause node under the same field path.
                    let mut clause = Node::new();
                    clause.insert(ELEM_MATCH.to_string(), rewrite_value(inner));
                    projection.insert(key, Value::Object(clause));
                } else {
                    kept.insert(key, Value::Object(child));
                }
            }
            other => {
                kept.insert(key, other);
            }
        }
    }

    (kept, projection)
}

/// Rewrites one filter node, bottom-up.
fn rewrite_node(node: Node) -> Node {
    let mut out = Node::new();

    for (key, value) in node {
        // Raw escape clauses ($where, or anything already canonical)
        // pass through with their value uninspected.
        if is_raw_clause(&key) {
            out.insert(key, value);
            continue;
        }

        // Element-match below the top level: rename in place, rewrite
        // the clause body, keep it in this tree.
        if let Some(symbol) = projection_symbol(&key) {
            out.insert(symbol.to_string(), rewrite_value(value));
            continue;
        }

        match value {
            // A nested node is always recursed into first; its own keys
            // decide what gets renamed. The parent key is never a
            // comparison operator when it guards a nested node.
            Value::Object(child) => {
                out.insert(key, Value::Object(rewrite_node(child)));
            }

            Value::Array(items) => {
                if let Some(symbol) = comparison_symbol(&key) {
                    // e.g. in / notIn: rename the key, keep the
                    // sequence untouched.
                    out.insert(symbol.to_string(), Value::Array(items));
                } else if let Some(symbol) = logical_symbol(&key) {
                    let items = items.into_iter().map(rewrite_value).collect();
                    out.insert(symbol.to_string(), Value::Array(items));
                } else {
                    // Sequences under ordinary field paths are data,
                    // not clauses; their elements stay as written.
                    out.insert(key, Value::Array(items));
                }
            }

            // Scalars and dates: rename the key if it is a comparison
            // operator, preserve the leaf either way.
            leaf => match comparison_symbol(&key) {
                Some(symbol) => {
                    out.insert(symbol.to_string(), leaf);
                }
                None => {
                    out.insert(key, leaf);
                }
            },
        }
    }

    out
}

/// Rewrites a value of any shape: nodes recurse through
/// [`rewrite_node`], sequence elements are rewritten one by one, and
/// leaves (including dates) come back untouched.
fn rewrite_value(value: Value) -> Value {
    match value {
        Value::Object(node) => Value::Object(rewrite_node(node)),
        Value::Array(items) => Value::Array(items.into_iter().map(rewrite_value).collect()),
        leaf => leaf,
    }
}
