//! Directory-backed document store
//!
//! Each document lives in its own JSON file named after its identifier
//! (`errors-12.json` holds `errors-12`). Queries list the directory, decode
//! every document, then filter, sort, and page in memory. This keeps the
//! backend honest for small installations; anything bigger belongs behind a
//! real document database implementing [`DocumentStore`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use faultlog_domain::{DocumentId, ErrorDocument};
use tracing::{debug, trace};

use crate::error::StoreError;
use crate::store::{DocumentPage, DocumentQuery, DocumentStore, StoreSession};

const DOCUMENT_EXTENSION: &str = "json";

/// Document store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    next_id: Arc<AtomicU64>,
}

impl FileStore {
    /// Open a store rooted at `path`, creating the directory if needed.
    ///
    /// The identifier sequence resumes after the highest identifier already
    /// present, so reopening a directory never reuses an id.
    pub fn connect(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = path.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;

        let highest = highest_existing_sequence(&root)?;
        debug!(
            "opened file store at {} (resuming after sequence {highest})",
            root.display()
        );
        Ok(FileStore {
            root,
            next_id: Arc::new(AtomicU64::new(highest)),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: &DocumentId) -> PathBuf {
        self.root
            .join(format!("{}.{DOCUMENT_EXTENSION}", id.as_str()))
    }
}

/// Scan the directory for the highest `errors-{n}` sequence already used.
fn highest_existing_sequence(root: &Path) -> Result<u64, StoreError> {
    let entries = fs::read_dir(root).map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut highest = 0;
    for entry in entries {
        let entry = entry.map_err(|source| StoreError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(stem) = Path::new(&name)
            .file_stem()
            .and_then(|stem| stem.to_str())
        else {
            continue;
        };
        if let Some(sequence) = stem
            .strip_prefix("errors-")
            .and_then(|n| n.parse::<u64>().ok())
        {
            highest = highest.max(sequence);
        }
    }
    Ok(highest)
}

impl DocumentStore for FileStore {
    type Session = FileSession;

    fn open_session(&self) -> Result<FileSession, StoreError> {
        Ok(FileSession {
            store: self.clone(),
            pending: Vec::new(),
        })
    }
}

/// Unit of work over a [`FileStore`].
///
/// Writes are buffered and flushed to disk at commit; dropping the session
/// without committing discards them.
pub struct FileSession {
    store: FileStore,
    pending: Vec<(DocumentId, ErrorDocument)>,
}

impl StoreSession for FileSession {
    fn store(&mut self, mut document: ErrorDocument) -> Result<DocumentId, StoreError> {
        let sequence = self.store.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = DocumentId::new(format!("errors-{sequence}"));
        document.id = Some(id.clone());
        self.pending.push((id.clone(), document));
        trace!("buffered document {id}");
        Ok(id)
    }

    fn load(&self, id: &DocumentId) -> Result<Option<ErrorDocument>, StoreError> {
        // Identifiers never contain path separators; anything else cannot
        // name a stored document.
        if id.as_str().contains(['/', '\\']) {
            return Ok(None);
        }

        let path = self.store.document_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let document = decode(&path, &contents)?;
        Ok(Some(document))
    }

    fn query(&self, query: DocumentQuery) -> Result<DocumentPage, StoreError> {
        let entries = fs::read_dir(&self.store.root).map_err(|source| StoreError::Io {
            path: self.store.root.clone(),
            source,
        })?;

        let mut matching: Vec<(DocumentId, ErrorDocument)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.store.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let document = decode(&path, &contents)?;

            let selected = match &query.application_name {
                Some(name) => document.application_name == *name,
                None => true,
            };
            if selected {
                matching.push((DocumentId::from(stem), document));
            }
        }
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
        for (id, document) in self.pending {
            let path = self.store.document_path(&id);
            let contents =
                serde_json::to_string_pretty(&document).map_err(|err| StoreError::Serialization {
                    message: err.to_string(),
                })?;
            fs::write(&path, contents).map_err(|source| StoreError::Io { path, source })?;
        }
        Ok(())
    }
}

fn decode(path: &Path, contents: &str) -> Result<ErrorDocument, StoreError> {
    serde_json::from_str(contents).map_err(|err| StoreError::Serialization {
        message: format!("{}: {err}", path.display()),
    })
}
