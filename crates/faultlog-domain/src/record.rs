//! The canonical in-memory error value

use chrono::{DateTime, FixedOffset, Utc};

use crate::multimap::NameValueMap;

/// One logged application failure.
///
/// A record is built once, at the point an error is captured, and treated as
/// immutable afterwards. `time` carries the caller's offset as supplied;
/// the storage layer converts it to UTC when the record is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    /// Name of the application that raised the error.
    pub application_name: String,
    /// Short human-readable description.
    pub message: String,
    /// Full detail text, typically a stack trace.
    pub detail: String,
    /// Component or subsystem the error originated in.
    pub source: String,
    /// HTTP status code associated with the failure, if any.
    pub status_code: i32,
    /// When the error occurred.
    pub time: DateTime<FixedOffset>,
    /// Classifier for the kind of error, e.g. an exception type name.
    pub error_type: String,
    /// Identity of the user the request ran as.
    pub user: String,
    /// Host the error was raised on.
    pub host_name: String,
    /// Pre-rendered HTML representation supplied by the web host.
    pub web_host_html_message: String,
    pub cookies: NameValueMap,
    pub form: NameValueMap,
    pub query_string: NameValueMap,
    pub server_variables: NameValueMap,
}

impl ErrorRecord {
    /// Create a record stamped with the current time.
    pub fn new(application_name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorRecord {
            application_name: application_name.into(),
            message: message.into(),
            detail: String::new(),
            source: String::new(),
            status_code: 0,
            time: Utc::now().fixed_offset(),
            error_type: String::new(),
            user: String::new(),
            host_name: String::new(),
            web_host_html_message: String::new(),
            cookies: NameValueMap::new(),
            form: NameValueMap::new(),
            query_string: NameValueMap::new(),
            server_variables: NameValueMap::new(),
        }
    }
}

impl Default for ErrorRecord {
    fn default() -> Self {
        ErrorRecord::new("", "")
    }
}
