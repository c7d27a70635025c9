//! JSON payload validation

use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::params::{is_safe_name, sanitize_value};
use super::{MAX_COLLECTION_LEN, MAX_DEPTH, MAX_PAYLOAD_CHARS};

/// Validate a request body before it is sent.
///
/// The body must be a JSON object. The size cap applies to the
/// serialized form; key names, string lengths, list lengths and integer
/// ranges are checked recursively. The top-level object sits at depth
/// zero, so a value held at the sixth nesting level is rejected.
/// Returns the validated copy that will be sent.
pub fn validate_payload(payload: &Value) -> Result<Value> {
    if !payload.is_object() {
        return Err(Error::PayloadNotObject);
    }

    let serialized = payload.to_string();
    let length = serialized.chars().count();
    if length > MAX_PAYLOAD_CHARS {
        return Err(Error::PayloadTooLarge { length });
    }

    validate_nested(payload, 0)
}

fn validate_nested(data: &Value, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::NestingTooDeep { depth });
    }

    match data {
        Value::Object(map) => {
            if map.len() > MAX_COLLECTION_LEN {
                return Err(Error::TooManyKeys { count: map.len() });
            }
            let mut validated = Map::new();
            for (key, value) in map {
                if !is_safe_name(key) {
                    return Err(Error::invalid_name(key));
                }
                validated.insert(key.clone(), validate_nested(value, depth + 1)?);
            }
            Ok(Value::Object(validated))
        }
        Value::Array(items) => {
            if items.len() > MAX_COLLECTION_LEN {
                return Err(Error::ListTooLong {
                    length: items.len(),
                });
            }
            let items = items
                .iter()
                .map(|item| validate_nested(item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        other => sanitize_value(other),
    }
}
