// clean_json.rs
use serde_json::{Map, Value};

use crate::{RED_ZONE, STACK_GROWTH};

/// True for the values an object field is dropped for: `null` and `""`.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Recursively removes object fields whose value is `null` or the empty string.
///
/// Only fields are ever removed. Array slots are kept even when they hold
/// `null` or `""`, and a blank root value is returned as is. Objects that end
/// up empty after cleaning stay in place as `{}`.
pub fn clean_json(value: Value) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || clean_value(value))
}

fn clean_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            // Rebuilt from the entries present at entry, so no key is visited twice
            let cleaned: Map<String, Value> = map
                .into_iter()
                .filter(|(_, v)| !is_blank(v))
                .map(|(k, v)| (k, clean_json(v)))
                .collect();
            Value::Object(cleaned)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(clean_json).collect()),
        other => other,
    }
}
