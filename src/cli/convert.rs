//! JSON <-> query tree conversion utilities
//!
//! Date leaves cross the JSON boundary in the extended-JSON form
//! `{"$date": "<RFC 3339>"}`; a single-key object of that shape parses
//! into [`Value::Date`] and serializes back the same way.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::value::{Node, Value};

/// Convert serde_json::Value to a query tree Value
pub fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            if let Some(dt) = extract_date(&obj) {
                return Value::Date(dt);
            }
            Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, json_to_value(v)))
                    .collect::<Node>(),
            )
        }
    }
}

/// Convert a query tree Value to serde_json::Value
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
        Value::Date(dt) => {
            let mut obj = serde_json::Map::new();
            obj.insert(
                "$date".to_string(),
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
            serde_json::Value::Object(obj)
        }
        Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(value_to_json).collect())
        }
        Value::Object(node) => serde_json::Value::Object(
            node.into_iter()
                .map(|(k, v)| (k, value_to_json(v)))
                .collect(),
        ),
    }
}

/// A date leaf in JSON is exactly `{"$date": "<RFC 3339 string>"}`.
/// Anything else, including an unparseable timestamp, stays an object.
fn extract_date(obj: &serde_json::Map<String, serde_json::Value>) -> Option<DateTime<Utc>> {
    if obj.len() != 1 {
        return None;
    }
    let stamp = obj.get("$date")?.as_str()?;
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
