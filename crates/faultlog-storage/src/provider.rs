//! The pluggable error log contract

use faultlog_domain::{DocumentId, ErrorRecord};

use crate::error::ErrorLogResult;

/// A stored error together with the identifier it is filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLogEntry {
    pub id: DocumentId,
    pub error: ErrorRecord,
}

impl ErrorLogEntry {
    pub fn new(id: DocumentId, error: ErrorRecord) -> Self {
        ErrorLogEntry { id, error }
    }
}

/// Contract every pluggable error log implements.
///
/// Hosting frameworks discover a log by configuration and talk to it through
/// this trait alone, so one log implementation can be swapped for another
/// without touching caller code.
pub trait ErrorLog {
    /// Human-readable name of this log implementation.
    fn name(&self) -> &str;

    /// Persist one error and return its store-assigned identifier.
    fn log(&self, error: &ErrorRecord) -> ErrorLogResult<DocumentId>;

    /// Look up a single logged error by identifier.
    fn get_error(&self, id: &DocumentId) -> ErrorLogResult<ErrorLogEntry>;

    /// Append one page of logged errors to `out`, most recent first, and
    /// return the total number of matching errors across all pages.
    fn get_errors(
        &self,
        page_index: usize,
        page_size: usize,
        out: &mut Vec<ErrorLogEntry>,
    ) -> ErrorLogResult<usize>;
}
