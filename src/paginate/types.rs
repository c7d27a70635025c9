//! Pagination types

use serde::Deserialize;
use serde_json::Value;

/// One page of a paginated listing, as the API envelopes it.
///
/// Only `items` is load-bearing. Every counter is tolerated as absent
/// because smaller endpoints omit them; see [`Page::counted_items`] and
/// [`Page::reported_total`] for the defaults the walk relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Records on this page, in server order.
    #[serde(default)]
    pub items: Vec<Value>,
    /// Server-reported count for this page.
    #[serde(default)]
    pub items_count: Option<u32>,
    /// Server-reported total across all pages.
    #[serde(default)]
    pub total_items: Option<u32>,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Offset this page starts at.
    #[serde(default)]
    pub offset: Option<u32>,
    /// Offset of the next page, when the server volunteers it.
    #[serde(default)]
    pub next_item: Option<u32>,
    /// Prebuilt URL of the next page, when the server volunteers it.
    #[serde(default)]
    pub next_link: Option<String>,
    /// Resource type name for the items.
    #[serde(default)]
    pub item_type: Option<String>,
    /// API version that produced the envelope.
    #[serde(default)]
    pub api_version: Option<String>,
}

impl Page {
    /// The item count used for continuation decisions: the envelope's
    /// count when present, else the number of items actually here.
    pub fn counted_items(&self) -> usize {
        self.items_count
            .map(|n| n as usize)
            .unwrap_or(self.items.len())
    }

    /// The reported grand total, defaulting to zero when the envelope
    /// omits it. A zero total ends the walk after the current page.
    pub fn reported_total(&self) -> usize {
        self.total_items.map(|n| n as usize).unwrap_or(0)
    }
}

/// The three response shapes a listing endpoint can produce.
#[derive(Debug, Clone)]
pub enum PageBody {
    /// Envelope object with an `items` array plus counters.
    Envelope(Page),
    /// Bare JSON array, used by direct-array reference resources.
    Direct(Vec<Value>),
    /// Anything else; yielded verbatim as a single item when non-empty.
    Other(Value),
}

impl PageBody {
    /// Sort a raw response body into its page shape. An object only
    /// counts as an envelope when it actually carries an `items` key.
    pub fn classify(body: Value) -> Self {
        if body.get("items").is_some() {
            return match Page::deserialize(&body) {
                Ok(page) => Self::Envelope(page),
                Err(_) => Self::Other(body),
            };
        }
        match body {
            Value::Array(items) => Self::Direct(items),
            other => Self::Other(other),
        }
    }
}

/// Whether an unrecognized body carries anything worth yielding. Null,
/// false, zero, empty strings and empty collections do not.
pub(crate) fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
