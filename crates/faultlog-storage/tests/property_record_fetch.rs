//! Property-based tests for recording and fetching errors
//!
//! Whatever the caller hands to `record` must come back intact through
//! `fetch_one`, and the persisted document must always carry the UTC
//! rendering of the record's time.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use faultlog_domain::{ErrorRecord, NameValueMap};
use faultlog_storage::{DocumentStore, ErrorStoreAdapter, MemoryStore, StoreSession};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,30}"
}

fn multimap_strategy() -> impl Strategy<Value = NameValueMap> {
    prop::collection::vec(("[a-z]{1,6}", text_strategy()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Timestamps with arbitrary offsets, so UTC normalization is exercised.
fn time_strategy() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (0i64..4_000_000_000, -14i32..=14).prop_map(|(secs, offset_hours)| {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        Utc.timestamp_opt(secs, 0).unwrap().with_timezone(&offset)
    })
}

fn record_strategy() -> impl Strategy<Value = ErrorRecord> {
    (
        text_strategy(),
        text_strategy(),
        0i32..600,
        time_strategy(),
        multimap_strategy(),
        multimap_strategy(),
    )
        .prop_map(|(message, detail, status_code, time, cookies, form)| {
            let mut record = ErrorRecord::new("storefront", message);
            record.detail = detail;
            record.status_code = status_code;
            record.time = time;
            record.cookies = cookies;
            record.form = form;
            record
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every recorded error gets a non-empty identifier and fetches back
    /// equal to the original.
    #[test]
    fn prop_record_then_fetch_returns_an_equal_error(record in record_strategy()) {
        let log = ErrorStoreAdapter::new(MemoryStore::new(), "");

        let id = log.record(&record).unwrap();
        prop_assert!(!id.as_str().is_empty());

        let entry = log.fetch_one(&id).unwrap();
        prop_assert_eq!(entry.id, id);
        prop_assert_eq!(entry.error, record);
    }

    /// The persisted document's time is the UTC conversion of the
    /// record's time, whatever offset the caller supplied.
    #[test]
    fn prop_persisted_time_is_utc_normalized(record in record_strategy()) {
        let store = MemoryStore::new();
        let log = ErrorStoreAdapter::new(store.clone(), "");

        let id = log.record(&record).unwrap();

        let session = store.open_session().unwrap();
        let document = session.load(&id).unwrap().unwrap();
        prop_assert_eq!(document.time, record.time.with_timezone(&Utc));
        prop_assert_eq!(document.id.as_ref(), Some(&id));
    }
}
