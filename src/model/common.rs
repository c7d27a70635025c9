//! Shared field types and date handling

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Date parsing
// ============================================================================

/// Parse a `YYYY-MM-DD` date string.
///
/// Falls back to extracting the date part of an ISO 8601 datetime, so
/// `"2025-01-15T10:30:00Z"` parses to the 15th. Empty, blank and
/// malformed strings yield `None` rather than an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    parse_datetime(value).map(|dt| dt.date_naive())
}

/// Parse an ISO 8601 datetime string.
///
/// Accepts an explicit offset (including `Z`) as well as naive values
/// with a `T` or space separator, which are taken as UTC. Malformed
/// strings yield `None`.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Render a date in the `YYYY-MM-DD` form the API expects.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// Serde adapters
// ============================================================================

/// Deserialize an optional date leniently: null, empty and malformed
/// strings all become `None`.
pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_date))
}

/// Deserialize a required date, accepting the datetime fallback.
pub(crate) fn req_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {value}")))
}

/// Deserialize an optional datetime leniently.
pub(crate) fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_datetime))
}

/// Deserialize a required datetime, tolerating naive timestamps.
pub(crate) fn req_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_datetime(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {value}")))
}

/// Deserialize an optional monetary amount. The API sends both JSON
/// numbers and numeric strings like `"5000.00"`.
pub(crate) fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {s}")))
        }
        Some(other) => Err(serde::de::Error::custom(format!("invalid decimal: {other}"))),
    }
}

/// Deserialize a required monetary amount from a number or string.
pub(crate) fn req_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {value}")))
}

// ============================================================================
// Shared record fragments
// ============================================================================

/// Custom attribute attached to constituents and gifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

/// Custom field definition with its selectable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_previous_values: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CustomValue>,
}

/// A selectable value of a custom field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomValue {
    pub id: i64,
    pub name: String,
}

/// Keyword within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    pub ordinal: i64,
    pub removable: bool,
    pub can_change: bool,
    pub can_select: bool,
    #[serde(deserialize_with = "req_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "req_datetime")]
    pub updated_at: DateTime<Utc>,
}
