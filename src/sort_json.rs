// sort_json.rs
use serde_json::{Map, Value};

use crate::number::integral_number;
use crate::{RED_ZONE, STACK_GROWTH};

/// Recursively re-orders JSON object keys ascending by code point.
/// Arrays keep their length and element order; each element is sorted
/// independently in case it is a nested object/array. Integral floats are
/// printed as integers on the way through.
pub fn sort_json(value: Value) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || sort_value(value))
}

fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            // `str` ordering compares UTF-8 bytes, which matches code-point order
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted_map: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, sort_json(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(sort_json).collect()),
        Value::Number(n) => Value::Number(integral_number(n)),
        // String, Bool and Null remain as is
        other => other,
    }
}
