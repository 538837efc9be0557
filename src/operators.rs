//! Operator vocabulary of the friendly query dialect.
//!
//! Three fixed families map a friendly name to its canonical
//! MongoDB-style symbol. Lookups are direct string matches; a key is an
//! operator exactly when it equals one of the names below, so a field
//! path that happens to spell an operator name is rewritten too. That
//! ambiguity is part of the dialect, not something this module resolves.

/// Friendly name of the element-match clause.
pub const CONTAINS_ELEMENT: &str = "containsElement";

/// Canonical symbol the element-match clause rewrites to.
pub const ELEM_MATCH: &str = "$elemMatch";

/// Canonical symbol for a comparison operator name, if `key` is one.
///
/// Comparison operators apply when the value under the key is a leaf or
/// a sequence; their value is carried over unchanged.
pub fn comparison_symbol(key: &str) -> Option<&'static str> {
    match key {
        "equalsTo" => Some("$eq"),
        "greaterThan" => Some("$gt"),
        "greaterThanOrEquals" => Some("$gte"),
        "lessThan" => Some("$lt"),
        "lessThanOrEquals" => Some("$lte"),
        "notEqualTo" => Some("$ne"),
        "in" => Some("$in"),
        "notIn" => Some("$nin"),
        "exists" => Some("$exists"),
        "arrayLength" => Some("$size"),
        _ => None,
    }
}

/// Canonical symbol for a logical operator name, if `key` is one.
///
/// Logical operators apply only when the value is a sequence; each
/// element of the sequence is a candidate filter node of its own.
/// `and`/`all` and `any`/`or` are aliases, not separate operators.
pub fn logical_symbol(key: &str) -> Option<&'static str> {
    match key {
        "and" | "all" => Some("$and"),
        "any" | "or" => Some("$or"),
        "none" | "nor" => Some("$nor"),
        _ => None,
    }
}

/// Canonical symbol for a projection operator name, if `key` is one.
///
/// The single entry is [`CONTAINS_ELEMENT`]. At the top level of a query
/// this clause is extracted into the projection tree; at any other depth
/// it is renamed in place.
pub fn projection_symbol(key: &str) -> Option<&'static str> {
    match key {
        CONTAINS_ELEMENT => Some(ELEM_MATCH),
        _ => None,
    }
}

/// True for raw escape clauses (`$where`, or any key already in
/// canonical form). These are copied through without inspecting their
/// value, which also makes rewriting idempotent on canonical output.
pub fn is_raw_clause(key: &str) -> bool {
    key.starts_with('$')
}
