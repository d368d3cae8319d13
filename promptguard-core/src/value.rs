//! The tagged value walked by `DataSanitizer`.
//!
//! `Value` mirrors the shapes found in JSON-like payloads plus an `Other`
//! variant for runtime values that have no structural mapping and are carried
//! in their textual form. Mappings keep insertion order.

use serde_json::Number;
use std::collections::HashMap;

/// A heterogeneous, possibly nested value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Vec<(String, Value)>),
    /// Textual form of a value with no structural counterpart.
    Other(String),
}

impl Value {
    /// Builds a mapping from key/value pairs.
    ///
    /// Later duplicates overwrite earlier values and keep the earlier position.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let entries = entries.into_iter();
        let mut builder = MappingBuilder::with_capacity(entries.size_hint().0);
        for (k, v) in entries {
            builder.insert(k.into(), v);
        }
        builder.finish()
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// Looks up a mapping entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Collects mapping entries in insertion order, indexing keys so a
/// duplicate is found without scanning the entries already stored.
#[derive(Debug, Default)]
pub(crate) struct MappingBuilder {
    entries: Vec<(String, Value)>,
    positions: HashMap<String, usize>,
}

impl MappingBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `(key, value)`, replacing the value in place if `key` already exists.
    pub(crate) fn insert(&mut self, key: String, value: Value) {
        match self.positions.get(&key) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub(crate) fn finish(self) -> Value {
        Value::Mapping(self.entries)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON number form and become `Other`.
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(num) => Value::Number(num),
            None => Value::Other(n.to_string()),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::mapping(map.into_iter().map(|(k, v)| (k, Value::from(v)))),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.clone()),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::Sequence(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::mapping(map.iter().map(|(k, v)| (k.as_str(), Value::from(v)))),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) | Value::Other(s) => serde_json::Value::String(s),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
