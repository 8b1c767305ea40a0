//! In-process document store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use faultlog_domain::{DocumentId, ErrorDocument};
use tracing::trace;

use crate::error::StoreError;
use crate::store::{DocumentPage, DocumentQuery, DocumentStore, StoreSession};

#[derive(Debug, Default)]
struct Shared {
    documents: RwLock<BTreeMap<DocumentId, ErrorDocument>>,
    next_id: AtomicU64,
}

/// Shared in-process document store backend.
///
/// Cloning shares the underlying state, so adapters built from clones of one
/// `MemoryStore` operate on a single logical store. Identifiers are assigned
/// from a process-wide sequence (`errors/1`, `errors/2`, ...).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    shared: Arc<Shared>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of committed documents.
    pub fn len(&self) -> usize {
        self.shared
            .documents
            .read()
            .map(|documents| documents.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryStore {
    type Session = MemorySession;

    fn open_session(&self) -> Result<MemorySession, StoreError> {
        Ok(MemorySession {
            shared: Arc::clone(&self.shared),
            pending: Vec::new(),
        })
    }
}

/// Unit of work over a [`MemoryStore`].
///
/// Writes are buffered and applied atomically at commit; dropping the
/// session without committing discards them.
pub struct MemorySession {
    shared: Arc<Shared>,
    pending: Vec<(DocumentId, ErrorDocument)>,
}

impl StoreSession for MemorySession {
    fn store(&mut self, mut document: ErrorDocument) -> Result<DocumentId, StoreError> {
        let sequence = self.shared.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = DocumentId::new(format!("errors/{sequence}"));
        document.id = Some(id.clone());
        self.pending.push((id.clone(), document));
        trace!("buffered document {id}");
        Ok(id)
    }

    fn load(&self, id: &DocumentId) -> Result<Option<ErrorDocument>, StoreError> {
        let documents = self.shared.documents.read().map_err(|_| lock_poisoned())?;
        Ok(documents.get(id).cloned())
    }

    fn query(&self, query: DocumentQuery) -> Result<DocumentPage, StoreError> {
        let documents = self.shared.documents.read().map_err(|_| lock_poisoned())?;

        let mut matching: Vec<(DocumentId, ErrorDocument)> = documents
            .iter()
            .filter(|(_, document)| match &query.application_name {
                Some(name) => document.application_name == *name,
                None => true,
            })
            .map(|(id, document)| (id.clone(), document.clone()))
            .collect();
        matching.sort_by(|(_, a), (_, b)| b.time.cmp(&a.time));

        let total = matching.len();
        let documents = matching
            .into_iter()
            .skip(query.skip)
            .take(query.take)
            .collect();
        Ok(DocumentPage { total, documents })
    }

    fn commit(self) -> Result<(), StoreError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let mut documents = self.shared.documents.write().map_err(|_| lock_poisoned())?;
        for (id, document) in self.pending {
            documents.insert(id, document);
        }
        Ok(())
    }
}

fn lock_poisoned() -> StoreError {
    StoreError::Unavailable {
        message: "store lock poisoned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use faultlog_domain::mapping;
    use faultlog_domain::ErrorRecord;

    fn document_for(application_name: &str, minutes_ago: i64) -> ErrorDocument {
        let mut record = ErrorRecord::new(application_name, "boom");
        record.time = (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset();
        mapping::to_document(&record)
    }

    #[test]
    fn committed_writes_are_visible_to_later_sessions() {
        let store = MemoryStore::new();

        let mut session = store.open_session().unwrap();
        let id = session.store(document_for("app", 0)).unwrap();
        session.commit().unwrap();

        let session = store.open_session().unwrap();
        let loaded = session.load(&id).unwrap().unwrap();
        assert_eq!(loaded.application_name, "app");
        assert_eq!(loaded.id, Some(id));
    }

    #[test]
    fn dropped_session_discards_buffered_writes() {
        let store = MemoryStore::new();

        let mut session = store.open_session().unwrap();
        let id = session.store(document_for("app", 0)).unwrap();
        drop(session);

        let session = store.open_session().unwrap();
        assert!(session.load(&id).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn identifiers_are_sequential_and_distinct() {
        let store = MemoryStore::new();
        let mut session = store.open_session().unwrap();
        let first = session.store(document_for("app", 0)).unwrap();
        let second = session.store(document_for("app", 0)).unwrap();
        session.commit().unwrap();

        assert_eq!(first.as_str(), "errors/1");
        assert_eq!(second.as_str(), "errors/2");
    }

    #[test]
    fn query_filters_sorts_and_pages() {
        let store = MemoryStore::new();
        let mut session = store.open_session().unwrap();
        for minutes_ago in [30, 20, 10] {
            session.store(document_for("a", minutes_ago)).unwrap();
        }
        session.store(document_for("b", 5)).unwrap();
        session.commit().unwrap();

        let session = store.open_session().unwrap();
        let page = session
            .query(DocumentQuery {
                application_name: Some("a".to_string()),
                skip: 1,
                take: 10,
            })
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.documents.len(), 2);
        // Most recent first; skipping one drops the 10-minutes-ago document.
        assert!(page.documents[0].1.time > page.documents[1].1.time);
        assert!(page
            .documents
            .iter()
            .all(|(_, document)| document.application_name == "a"));
    }

    #[test]
    fn total_ignores_skip_and_take() {
        let store = MemoryStore::new();
        let mut session = store.open_session().unwrap();
        for minutes_ago in 0..7 {
            session.store(document_for("app", minutes_ago)).unwrap();
        }
        session.commit().unwrap();

        let session = store.open_session().unwrap();
        let page = session
            .query(DocumentQuery {
                application_name: None,
                skip: 100,
                take: 3,
            })
            .unwrap();
        assert_eq!(page.total, 7);
        assert!(page.documents.is_empty());
    }

    #[test]
    fn clones_share_one_logical_store() {
        let store = MemoryStore::new();
        let clone = store.clone();

        let mut session = store.open_session().unwrap();
        let id = session.store(document_for("app", 0)).unwrap();
        session.commit().unwrap();

        let session = clone.open_session().unwrap();
        assert!(session.load(&id).unwrap().is_some());
        assert_eq!(clone.len(), 1);
    }
}
