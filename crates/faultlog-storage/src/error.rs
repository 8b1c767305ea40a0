//! Error types for the Faultlog storage layer

use std::path::PathBuf;

use faultlog_domain::DocumentId;
use thiserror::Error;

/// Result type for error log operations.
pub type ErrorLogResult<T> = Result<T, ErrorLogError>;

/// Failures raised by a document-store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store could not be reached or refused the operation
    #[error("Document store unavailable: {message}")]
    Unavailable { message: String },

    /// IO failure against a file-backed store
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be encoded or decoded
    #[error("Document serialization failed: {message}")]
    Serialization { message: String },
}

/// Caller-facing failures of an error log.
#[derive(Error, Debug)]
pub enum ErrorLogError {
    /// Construction-time configuration problem; the adapter never becomes usable
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Caller passed an argument the operation contract forbids
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No document exists under the requested identifier
    #[error("No error is stored under id '{id}'")]
    NotFound { id: DocumentId },

    /// The underlying store failed; the operation did not complete
    #[error(transparent)]
    Store(#[from] StoreError),
}
