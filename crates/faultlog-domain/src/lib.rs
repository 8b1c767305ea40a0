//! Canonical error model and document mapping for Faultlog
//!
//! This crate defines the two shapes an application error takes on its way
//! into and out of a document store, and the translation between them:
//!
//! - [`ErrorRecord`]: the in-memory value a caller constructs when an error
//!   is captured. Context collections (cookies, form fields, query-string
//!   parameters, server variables) are order-preserving multi-maps because
//!   repeated keys carry multiple values.
//! - [`ErrorDocument`]: the persistence shape. Collections flatten to ordered
//!   name/value pair lists, the store-assigned [`DocumentId`] is optional
//!   until the first write, and the review timestamps (`reviewed`,
//!   `resolved`) exist only here.
//! - [`mapping`]: pure conversion functions between the two. Converting a
//!   record to a document and back reproduces the record field for field,
//!   including collection order and duplicate-key multiplicity.

pub mod document;
pub mod mapping;
pub mod multimap;
pub mod record;

pub use document::{DocumentId, ErrorDocument};
pub use multimap::{NameValueMap, NameValuePair};
pub use record::ErrorRecord;
