//! Masking rules

use serde_json::{Map, Value};

/// Substrings that mark a field name as sensitive. Matched
/// case-insensitively anywhere in the name, so `email` also covers
/// `email_address` and `primary_email`.
const SENSITIVE_NAMES: &[&str] = &[
    "password",
    "passwd",
    "secret",
    "token",
    "key",
    "api_key",
    "ssn",
    "social_security",
    "credit_card",
    "cc_number",
    "card_number",
    "email",
    "phone",
    "mobile",
    "tel",
    "address",
    "birth_date",
    "dob",
    "date_of_birth",
    "birthday",
    "account_number",
    "routing_number",
    "bank_account",
];

/// Headers that carry credentials and get the stronger credential mask.
const CREDENTIAL_HEADERS: &[&str] = &["authorization", "x-api-key", "api-key"];

/// Placeholder that replaces an entire query string.
const QUERY_PLACEHOLDER: &str = "[QUERY_PARAMS_REMOVED]";

/// Check whether a field name suggests sensitive data.
pub fn is_sensitive_name(name: &str) -> bool {
    let name = name.to_lowercase();
    SENSITIVE_NAMES.iter().any(|marker| name.contains(marker))
}

/// Check whether a header carries a credential.
pub fn is_credential_header(name: &str) -> bool {
    let name = name.to_lowercase();
    CREDENTIAL_HEADERS.iter().any(|h| *h == name)
}

/// Mask a sensitive string value: values longer than 4 characters keep
/// their first and last two characters, shorter ones are fully hidden.
pub fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 4 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{head}***{tail}")
    } else {
        "***".to_string()
    }
}

/// Mask a credential header value. Long values keep a first8...last4
/// window for correlation in logs; anything short is hidden entirely.
pub fn mask_credential(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 10 {
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***MASKED***".to_string()
    }
}

/// Mask one field by name. Lists are always walked per item, each item
/// judged under a synthesized `<name>_item` key (so a sensitive list
/// name masks every item rather than the list wholesale). Objects under
/// a sensitive name collapse to `"***"`, other objects recurse. Scalars
/// under a sensitive name get the partial string mask or `"***"`.
pub fn mask_field(name: &str, value: &Value) -> Value {
    match value {
        Value::Array(items) => {
            let item_name = format!("{name}_item");
            Value::Array(items.iter().map(|v| mask_field(&item_name, v)).collect())
        }
        Value::Object(map) => {
            if is_sensitive_name(name) {
                Value::String("***".to_string())
            } else {
                Value::Object(mask_object(map))
            }
        }
        Value::String(s) if is_sensitive_name(name) => Value::String(mask_value(s)),
        other => {
            if is_sensitive_name(name) {
                Value::String("***".to_string())
            } else {
                other.clone()
            }
        }
    }
}

fn mask_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(k, v)| (k.clone(), mask_field(k, v)))
        .collect()
}

/// Mask a whole payload for diagnostic output.
///
/// Objects are walked field by field; anything else is replaced wholesale
/// since there are no field names to judge it by.
pub fn mask_payload(payload: &Value) -> Value {
    match payload {
        Value::Object(map) => Value::Object(mask_object(map)),
        _ => serde_json::json!({ "payload": "[SANITIZED]" }),
    }
}

/// Strip the query string from a URL, leaving a fixed placeholder so the
/// output still shows that parameters were present.
pub fn sanitize_url(url: &str) -> String {
    match url.split_once('?') {
        Some((base, _)) => format!("{base}?{QUERY_PLACEHOLDER}"),
        None => url.to_string(),
    }
}
