//! Query parameters

use serde_json::{Map, Value};

/// Query parameters for a GET request.
///
/// Values are JSON so callers can pass numbers, booleans and lists
/// without stringifying. List values serialize as repeated keys
/// (`q=a&q=b`) and nulls are dropped from the wire form.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Map<String, Value>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a parameter only when a value is present
    #[must_use]
    pub fn maybe_param(mut self, key: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        if let Some(value) = value {
            self.params.insert(key.into(), value.into());
        }
        self
    }

    /// Insert a parameter in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    /// Whether any parameters are set
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterate parameters
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.params.iter()
    }

    /// The query as a JSON object, for redacted tracing.
    pub fn to_value(&self) -> Value {
        Value::Object(self.params.clone())
    }

    /// Flatten to wire pairs: scalars render bare, list values repeat
    /// the key per item, nulls are dropped.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.params {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        pairs.push((key.clone(), scalar_text(item)));
                    }
                }
                other => pairs.push((key.clone(), scalar_text(other))),
            }
        }
        pairs
    }
}

/// Render one scalar as it should appear in a query string: strings
/// bare, everything else via its JSON form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
