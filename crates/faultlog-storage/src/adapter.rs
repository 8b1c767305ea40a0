//! The error log adapter over a document store

use faultlog_domain::{mapping, DocumentId, ErrorRecord};
use tracing::{debug, trace};

use crate::config::{ConnectionStrings, ProviderOptions};
use crate::error::{ErrorLogError, ErrorLogResult, StoreError};
use crate::provider::{ErrorLog, ErrorLogEntry};
use crate::store::{DocumentQuery, DocumentStore, StoreSession};

/// Error log backed by a document store.
///
/// The adapter holds exactly two pieces of state, both fixed at
/// construction: the store handle and the application-name scope. It takes
/// no locks of its own; operations may be issued concurrently from any
/// number of threads, each running inside its own short-lived store
/// session, and all isolation guarantees are the backend's. Cross-call
/// ordering is not guaranteed: two concurrent
/// [`record`](ErrorStoreAdapter::record) calls may land in either order,
/// and a page fetch racing a record may or may not observe the new
/// document.
#[derive(Debug, Clone)]
pub struct ErrorStoreAdapter<S> {
    store: S,
    application_name: String,
}

impl<S: DocumentStore> ErrorStoreAdapter<S> {
    /// Create an adapter around an already-connected store handle.
    ///
    /// An empty `application_name` disables tenant filtering: the adapter
    /// sees every document in the store.
    pub fn new(store: S, application_name: impl Into<String>) -> Self {
        ErrorStoreAdapter {
            store,
            application_name: application_name.into(),
        }
    }

    /// Create an adapter from named options.
    ///
    /// Resolves the `connection_string_name` option through `connections`
    /// and opens the store with `connect`. This is the only point at which
    /// a connection is opened; the handle is held for the adapter's
    /// lifetime, and a connection that later breaks surfaces as a store
    /// error on every subsequent call rather than being re-established.
    pub fn from_config<F>(
        options: &ProviderOptions,
        connections: &ConnectionStrings,
        connect: F,
    ) -> ErrorLogResult<Self>
    where
        F: FnOnce(&str) -> Result<S, StoreError>,
    {
        let name = options.connection_string_name()?;
        let connection_string =
            connections
                .resolve(name)
                .ok_or_else(|| ErrorLogError::Configuration {
                    message: format!("no connection string named '{name}' is configured"),
                })?;

        let application_name = options.application_name().to_string();
        debug!("initializing error store adapter (connection: '{name}', application: '{application_name}')");

        let store = connect(connection_string)?;
        Ok(ErrorStoreAdapter {
            store,
            application_name,
        })
    }

    /// The application-name scope; empty means no tenant filter.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Persist one error and return its store-assigned identifier.
    ///
    /// The record's time crosses the storage boundary in UTC. Every call
    /// stores a new document; identical content is not deduplicated.
    pub fn record(&self, error: &ErrorRecord) -> ErrorLogResult<DocumentId> {
        trace!("record(application: '{}')", error.application_name);

        let document = mapping::to_document(error);

        let mut session = self.store.open_session()?;
        let id = session.store(document)?;
        session.commit()?;
        Ok(id)
    }

    /// Look up a single logged error by identifier.
    ///
    /// An identifier with no document behind it is reported as
    /// [`ErrorLogError::NotFound`]; an absent document is never mapped into
    /// an empty record.
    pub fn fetch_one(&self, id: &DocumentId) -> ErrorLogResult<ErrorLogEntry> {
        trace!("fetch_one(id: {id})");

        let session = self.store.open_session()?;
        match session.load(id)? {
            Some(document) => Ok(ErrorLogEntry::new(id.clone(), mapping::to_record(&document))),
            None => Err(ErrorLogError::NotFound { id: id.clone() }),
        }
    }

    /// Fetch one page of logged errors, most recent first.
    ///
    /// Returns the total number of matching errors together with the page's
    /// entries; the total counts the whole filtered set, so callers can
    /// derive the page count from it. A non-empty application-name scope
    /// restricts both the entries and the total to that application. A
    /// failure anywhere in the query fails the whole call; no partial page
    /// is returned.
    pub fn fetch_page(
        &self,
        page_index: usize,
        page_size: usize,
    ) -> ErrorLogResult<(usize, Vec<ErrorLogEntry>)> {
        trace!("fetch_page(page_index: {page_index}, page_size: {page_size})");

        if page_size == 0 {
            return Err(ErrorLogError::InvalidArgument {
                message: "page_size must be positive".to_string(),
            });
        }

        let query = DocumentQuery {
            application_name: if self.application_name.is_empty() {
                None
            } else {
                Some(self.application_name.clone())
            },
            skip: page_size.saturating_mul(page_index),
            take: page_size,
        };

        let session = self.store.open_session()?;
        let page = session.query(query)?;

        let entries = page
            .documents
            .iter()
            .map(|(id, document)| ErrorLogEntry::new(id.clone(), mapping::to_record(document)))
            .collect();
        Ok((page.total, entries))
    }
}

impl<S: DocumentStore> ErrorLog for ErrorStoreAdapter<S> {
    fn name(&self) -> &str {
        "Document Store Error Log"
    }

    fn log(&self, error: &ErrorRecord) -> ErrorLogResult<DocumentId> {
        self.record(error)
    }

    fn get_error(&self, id: &DocumentId) -> ErrorLogResult<ErrorLogEntry> {
        self.fetch_one(id)
    }

    fn get_errors(
        &self,
        page_index: usize,
        page_size: usize,
        out: &mut Vec<ErrorLogEntry>,
    ) -> ErrorLogResult<usize> {
        let (total, entries) = self.fetch_page(page_index, page_size)?;
        out.extend(entries);
        Ok(total)
    }
}
