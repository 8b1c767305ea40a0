//! Persistence shape of a logged error

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::multimap::NameValuePair;

/// Store-assigned document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId(id.to_string())
    }
}

/// The stored shape of one logged error.
///
/// `id` is absent until the store assigns it during the first write. The
/// context collections are ordered pair lists rather than multi-maps so the
/// document serializes without losing duplicate keys or their order.
/// `reviewed` and `resolved` are set by error-triage tooling after the fact
/// and have no counterpart on the in-memory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub id: Option<DocumentId>,
    pub application_name: String,
    pub message: String,
    pub detail: String,
    pub source: String,
    pub status_code: i32,
    pub time: DateTime<Utc>,
    pub error_type: String,
    pub user: String,
    pub host_name: String,
    pub web_host_html_message: String,
    pub cookies: Vec<NameValuePair>,
    pub form: Vec<NameValuePair>,
    pub query_string: Vec<NameValuePair>,
    pub server_variables: Vec<NameValuePair>,
    pub reviewed: Option<DateTime<Utc>>,
    pub resolved: Option<DateTime<Utc>>,
}
