//! Ordered name/value collections for error context data

use serde::{Deserialize, Serialize};

/// A single name/value pair in the stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValuePair {
    pub key: String,
    pub value: String,
}

impl NameValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        NameValuePair {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Order-preserving multi-map of string names to string values.
///
/// Keys may repeat; insertion order is significant. Repeated form fields or
/// cookies carry one entry per occurrence, so lookups distinguish "first
/// value" ([`get`](NameValueMap::get)) from "all values"
/// ([`get_all`](NameValueMap::get_all)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValueMap {
    entries: Vec<(String, String)>,
}

impl NameValueMap {
    pub fn new() -> Self {
        NameValueMap::default()
    }

    /// Append a value under `key`, preserving any existing entries for it.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Get the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over every value stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        NameValueMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for NameValueMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
