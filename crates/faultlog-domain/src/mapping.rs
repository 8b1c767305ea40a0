//! Translation between the canonical record and its stored document shape
//!
//! Both directions are pure and field-complete. The only asymmetry is
//! deliberate: a document's identifier and review timestamps have no
//! record-side counterpart, so they are dropped on the way back.

use chrono::Utc;

use crate::document::ErrorDocument;
use crate::multimap::{NameValueMap, NameValuePair};
use crate::record::ErrorRecord;

/// Convert a record into its stored document shape.
///
/// Every scalar is copied verbatim; `time` is re-expressed in UTC without
/// changing the instant. The identifier and review timestamps are left
/// unset — the store assigns the identifier during the write.
pub fn to_document(record: &ErrorRecord) -> ErrorDocument {
    ErrorDocument {
        id: None,
        application_name: record.application_name.clone(),
        message: record.message.clone(),
        detail: record.detail.clone(),
        source: record.source.clone(),
        status_code: record.status_code,
        time: record.time.with_timezone(&Utc),
        error_type: record.error_type.clone(),
        user: record.user.clone(),
        host_name: record.host_name.clone(),
        web_host_html_message: record.web_host_html_message.clone(),
        cookies: to_pairs(&record.cookies),
        form: to_pairs(&record.form),
        query_string: to_pairs(&record.query_string),
        server_variables: to_pairs(&record.server_variables),
        reviewed: None,
        resolved: None,
    }
}

/// Convert a stored document back into a record.
///
/// The identifier and review timestamps are dropped; each pair list is
/// rebuilt into a multi-map in list order, so duplicate keys keep their
/// multiplicity and position.
pub fn to_record(document: &ErrorDocument) -> ErrorRecord {
    ErrorRecord {
        application_name: document.application_name.clone(),
        message: document.message.clone(),
        detail: document.detail.clone(),
        source: document.source.clone(),
        status_code: document.status_code,
        time: document.time.fixed_offset(),
        error_type: document.error_type.clone(),
        user: document.user.clone(),
        host_name: document.host_name.clone(),
        web_host_html_message: document.web_host_html_message.clone(),
        cookies: to_map(&document.cookies),
        form: to_map(&document.form),
        query_string: to_map(&document.query_string),
        server_variables: to_map(&document.server_variables),
    }
}

fn to_pairs(map: &NameValueMap) -> Vec<NameValuePair> {
    map.iter().map(|(k, v)| NameValuePair::new(k, v)).collect()
}

fn to_map(pairs: &[NameValuePair]) -> NameValueMap {
    pairs
        .iter()
        .map(|pair| (pair.key.clone(), pair.value.clone()))
        .collect()
}
