//! Dynamically-typed entry points.
//!
//! Callers holding untyped data (a JSON field, a config value) go through
//! these; anything that is not a string fails with a type-kind error before
//! the transform runs.

use crate::cipher;
use crate::error::Error;
use serde_json::Value;

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode a string-valued `Value`. Non-string values fail with a type error
/// naming the rejected kind.
pub fn encode_value(input: &Value) -> Result<String, Error> {
    match input {
        Value::String(s) => cipher::transform(s),
        other => Err(Error::NotText {
            found: kind_name(other),
        }),
    }
}

/// Decode a string-valued `Value`; the transform is its own inverse.
pub fn decode_value(input: &Value) -> Result<String, Error> {
    encode_value(input)
}
