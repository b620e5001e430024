use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::clean_json::clean_json;
use crate::error::NormalizeError;
use crate::sort_json::sort_json;

/// Parses a JSON document, drops blank object fields, sorts every object's
/// keys and serializes the result as a single compact line.
pub fn normalize(input: &str) -> Result<String, NormalizeError> {
    normalize_slice(input.as_bytes(), None)
}

/// Byte-level entry point used by the CLI. Input that is not valid UTF-8 is
/// rejected like any other malformed document. With `max_input_bytes` set,
/// oversized input is rejected before parsing.
pub fn normalize_slice(
    input: &[u8],
    max_input_bytes: Option<usize>,
) -> Result<String, NormalizeError> {
    if let Some(limit) = max_input_bytes {
        if input.len() > limit {
            return Err(NormalizeError::InputTooLarge {
                size: input.len(),
                limit,
            });
        }
    }

    let parsed = parse_document(input)?;
    debug!("Parsed {} byte document ({})", input.len(), type_name(&parsed));

    let normalized = sort_json(clean_json(parsed));
    let output = serde_json::to_string(&normalized)?;
    debug!("Normalized document is {} bytes", output.len());

    Ok(output)
}

/// Strict parse with no nesting limit; the stack grows on demand instead.
fn parse_document(input: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(input);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    // Anything but whitespace after the document is malformed
    de.end()?;
    Ok(value)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
