//! # Query Parameter Parsing
//!
//! Collects raw `key=value` pairs from a query string into per-key values.
//! A key seen once is a single value; a repeated key, or one written with a
//! trailing `[]`, is a sequence.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// Add another occurrence of the same key
    fn push(self, value: String) -> Self {
        match self {
            QueryValue::Single(first) => QueryValue::Many(vec![first, value]),
            QueryValue::Many(mut values) => {
                values.push(value);
                QueryValue::Many(values)
            }
        }
    }

    /// Normalize to a sequence
    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::Single(value) => std::slice::from_ref(value),
            QueryValue::Many(values) => values,
        }
    }

    pub fn into_values(self) -> Vec<String> {
        match self {
            QueryValue::Single(value) => vec![value],
            QueryValue::Many(values) => values,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            QueryValue::Single(value) => Value::String(value.clone()),
            QueryValue::Many(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Parsed query parameters keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, QueryValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded pairs in query-string order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.insert(key.into(), value.into());
        }
        params
    }

    /// Record one occurrence of `key`.
    pub fn insert(&mut self, key: String, value: String) {
        let (key, bracketed) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key, false),
        };

        let next = match self.params.remove(&key) {
            Some(existing) => existing.push(value),
            None if bracketed => QueryValue::Many(vec![value]),
            None => QueryValue::Single(value),
        };
        self.params.insert(key, next);
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// JSON object with one member per key: a string for a single value,
    /// an array of strings for a sequence.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_json()))
            .collect();
        Value::Object(object)
    }
}
