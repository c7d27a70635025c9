//! Query parameter validation

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

use crate::client::Query;
use crate::error::{Error, Result};

use super::{MAX_COLLECTION_LEN, MAX_INTEGER, MAX_NAME_LEN, MAX_STRING_CHARS};

/// Parameter and key names: alphanumerics, underscore, dash, and square
/// brackets for API array notation (`keyword_ids[]`).
static SAFE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_\[\]-]+$").unwrap());

/// Patterns that look like injection attempts. Matches are logged for
/// monitoring but the value is still accepted unchanged.
static SUSPICIOUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"<script",           // XSS
        r"javascript:",       // JavaScript scheme
        r#"['"];"#,           // quote-then-terminator
        r"<!--",              // HTML comment opener
        r"\\x[0-9a-fA-F]{2}", // literal hex escapes
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Check whether a parameter or key name is safe to send.
pub fn is_safe_name(name: &str) -> bool {
    SAFE_NAME.is_match(name) && name.len() <= MAX_NAME_LEN
}

/// Validate a single parameter value.
///
/// Null and booleans pass through. Integers are range-checked; floats
/// are not. Strings are length-checked and scanned for suspicious
/// patterns. Lists are length-checked and validated per item. Objects
/// have no query-string form, so they are coerced to their serialized
/// text and revalidated as strings. Returns the value that will
/// actually be sent.
pub fn sanitize_value(value: &Value) -> Result<Value> {
    match value {
        Value::Null | Value::Bool(_) => Ok(value.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i.unsigned_abs() > MAX_INTEGER {
                    return Err(Error::IntegerTooLarge {
                        value: i128::from(i),
                    });
                }
            } else if let Some(u) = n.as_u64() {
                if u > MAX_INTEGER {
                    return Err(Error::IntegerTooLarge {
                        value: i128::from(u),
                    });
                }
            }
            Ok(value.clone())
        }
        Value::String(s) => {
            check_string(s)?;
            Ok(value.clone())
        }
        Value::Array(items) => {
            if items.len() > MAX_COLLECTION_LEN {
                return Err(Error::ListTooLong {
                    length: items.len(),
                });
            }
            let items = items
                .iter()
                .map(sanitize_value)
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        Value::Object(_) => {
            let text = value.to_string();
            check_string(&text)?;
            Ok(Value::String(text))
        }
    }
}

/// Validate a full query. Names are checked against the safe pattern and
/// every value is sanitized; the returned query is what goes on the wire.
pub fn validate_params(query: &Query) -> Result<Query> {
    let mut validated = Query::new();
    for (key, value) in query.iter() {
        if !is_safe_name(key) {
            return Err(Error::invalid_name(key));
        }
        validated.insert(key, sanitize_value(value)?);
    }
    Ok(validated)
}

fn check_string(s: &str) -> Result<()> {
    let length = s.chars().count();
    if length > MAX_STRING_CHARS {
        return Err(Error::StringTooLong { length });
    }

    let lowered = s.to_lowercase();
    for pattern in SUSPICIOUS_PATTERNS.iter() {
        if pattern.is_match(&lowered) {
            warn!("Suspicious pattern detected in parameter: {}", pattern);
        }
    }
    Ok(())
}
