//! The document-store seam
//!
//! An error log owns one [`DocumentStore`] handle for its whole lifetime and
//! runs every operation inside a short-lived [`StoreSession`]: open, act,
//! commit (or drop to discard). Backends implement these two traits; the
//! adapter never sees anything more concrete.

use faultlog_domain::{DocumentId, ErrorDocument};

use crate::error::StoreError;

/// A paged query over stored error documents.
///
/// Results are always ordered by `time` descending, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    /// Restrict to documents whose application name equals this value.
    pub application_name: Option<String>,
    /// Number of matching documents to skip.
    pub skip: usize,
    /// Maximum number of documents to return after skipping.
    pub take: usize,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPage {
    /// Count of all matching documents, unaffected by skip/take.
    pub total: usize,
    /// The page's documents with their identifiers, in query order.
    pub documents: Vec<(DocumentId, ErrorDocument)>,
}

/// Connection handle to a document store.
///
/// Opening the handle is the owner's one-time setup; afterwards the handle
/// is immutable and safe to share across threads when the backend is.
pub trait DocumentStore {
    type Session: StoreSession;

    /// Open a unit of work against the store.
    fn open_session(&self) -> Result<Self::Session, StoreError>;
}

/// A short-lived unit of work against a document store.
///
/// Writes become durable on [`commit`](StoreSession::commit); a session
/// dropped without committing discards them. Reads observe previously
/// committed state only.
pub trait StoreSession {
    /// Store a document, assigning and returning its identifier.
    ///
    /// The identifier is assigned immediately; the write itself lands at
    /// commit time.
    fn store(&mut self, document: ErrorDocument) -> Result<DocumentId, StoreError>;

    /// Load a document by identifier.
    fn load(&self, id: &DocumentId) -> Result<Option<ErrorDocument>, StoreError>;

    /// Run a paged query.
    fn query(&self, query: DocumentQuery) -> Result<DocumentPage, StoreError>;

    /// Commit the session's buffered writes.
    fn commit(self) -> Result<(), StoreError>;
}
