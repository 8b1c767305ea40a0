//! Construction-time configuration
//!
//! Adapters are handed a bag of named options by the hosting framework.
//! Two keys are recognized: [`CONNECTION_STRING_NAME`] names a connection
//! string that must exist in the [`ConnectionStrings`] registry, and
//! [`APPLICATION_NAME`] scopes the adapter to one application sharing the
//! store. Everything else in the bag is ignored.

use std::collections::HashMap;
use std::env;

use tracing::debug;

use crate::error::{ErrorLogError, ErrorLogResult};

/// Option key naming the connection string to resolve. Required.
pub const CONNECTION_STRING_NAME: &str = "connection_string_name";

/// Option key carrying the tenant scope. Optional; empty means no filter.
pub const APPLICATION_NAME: &str = "application_name";

/// Environment variable prefix for [`ConnectionStrings::from_env`].
pub const CONNECTION_ENV_PREFIX: &str = "FAULTLOG_CONNECTION_";

/// Named options handed to an adapter at construction.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    options: HashMap<String, String>,
}

impl ProviderOptions {
    pub fn new() -> Self {
        ProviderOptions::default()
    }

    /// Build the bag from key/value pairs, last value per key winning.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ProviderOptions {
            options: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// The required connection string name.
    ///
    /// A missing or blank value means the adapter cannot be constructed.
    pub fn connection_string_name(&self) -> ErrorLogResult<&str> {
        match self.get(CONNECTION_STRING_NAME) {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(ErrorLogError::Configuration {
                message: format!("the '{CONNECTION_STRING_NAME}' option is required"),
            }),
        }
    }

    /// The tenant scope. Empty means the adapter sees every application.
    pub fn application_name(&self) -> &str {
        self.get(APPLICATION_NAME).unwrap_or("")
    }
}

/// Registry of named connection strings.
///
/// The hosting environment decides where these come from; this crate only
/// resolves names against the registry it is given.
/// [`ConnectionStrings::from_env`] covers the common case of environment
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct ConnectionStrings {
    entries: HashMap<String, String>,
}

impl ConnectionStrings {
    pub fn new() -> Self {
        ConnectionStrings::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Look up a connection string by name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Load every `FAULTLOG_CONNECTION_<NAME>` variable from the process
    /// environment; `<NAME>` becomes the registry key verbatim.
    pub fn from_env() -> Self {
        let mut registry = ConnectionStrings::new();
        for (key, value) in env::vars() {
            if let Some(name) = key.strip_prefix(CONNECTION_ENV_PREFIX) {
                debug!("registered connection string '{name}' from the environment");
                registry.insert(name, value);
            }
        }
        registry
    }
}
