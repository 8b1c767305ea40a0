//! Document-store backends and the error log adapter for Faultlog
//!
//! [`ErrorStoreAdapter`] persists [`ErrorRecord`](faultlog_domain::ErrorRecord)
//! values into a document store and retrieves them back, optionally scoped to
//! one application name so several applications can share a store without
//! seeing each other's errors. The store itself sits behind the
//! [`DocumentStore`]/[`StoreSession`] traits; two backends ship with the
//! crate ([`MemoryStore`] and [`FileStore`]), and anything that can store,
//! load, and run a paged query over documents can be plugged in instead.
//!
//! Hosts integrate through the [`ErrorLog`] trait, the pluggable provider
//! contract, and construct adapters either directly from a connected handle
//! or from named options via [`ErrorStoreAdapter::from_config`].
//!
//! ```
//! use faultlog_domain::ErrorRecord;
//! use faultlog_storage::{ErrorStoreAdapter, MemoryStore};
//!
//! # fn main() -> faultlog_storage::ErrorLogResult<()> {
//! let log = ErrorStoreAdapter::new(MemoryStore::new(), "orders-api");
//!
//! let mut error = ErrorRecord::new("orders-api", "payment gateway timeout");
//! error.host_name = "web-01".to_string();
//!
//! let id = log.record(&error)?;
//! let entry = log.fetch_one(&id)?;
//! assert_eq!(entry.error.message, "payment gateway timeout");
//!
//! let (total, page) = log.fetch_page(0, 25)?;
//! assert_eq!((total, page.len()), (1, 1));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod provider;
pub mod store;

pub use adapter::ErrorStoreAdapter;
pub use config::{ConnectionStrings, ProviderOptions};
pub use error::{ErrorLogError, ErrorLogResult, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use provider::{ErrorLog, ErrorLogEntry};
pub use store::{DocumentPage, DocumentQuery, DocumentStore, StoreSession};
