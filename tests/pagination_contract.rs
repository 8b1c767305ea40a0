//! Pagination arithmetic and ordering guarantees
//!
//! With 25 stored errors and a page size of 10: page 0 holds 10, page 2
//! holds 5, page 3 is empty, and every page reports a total of 25. Pages
//! are always ordered by time, most recent error first.

use chrono::{Duration, TimeZone, Utc};
use faultlog_domain::ErrorRecord;
use faultlog_storage::{ErrorStoreAdapter, MemoryStore};

fn populated_log(count: usize) -> ErrorStoreAdapter<MemoryStore> {
    let log = ErrorStoreAdapter::new(MemoryStore::new(), "storefront");
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    for minute in 0..count {
        let mut record = ErrorRecord::new("storefront", format!("error {minute}"));
        record.time = (base + Duration::minutes(minute as i64)).fixed_offset();
        log.record(&record).unwrap();
    }
    log
}

#[test]
fn page_sizes_and_totals_follow_the_arithmetic() {
    let log = populated_log(25);

    let (total, first) = log.fetch_page(0, 10).unwrap();
    assert_eq!((total, first.len()), (25, 10));

    let (total, third) = log.fetch_page(2, 10).unwrap();
    assert_eq!((total, third.len()), (25, 5));

    let (total, past_the_end) = log.fetch_page(3, 10).unwrap();
    assert_eq!((total, past_the_end.len()), (25, 0));
}

#[test]
fn entries_arrive_most_recent_first() {
    let log = ErrorStoreAdapter::new(MemoryStore::new(), "storefront");
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

    // Recorded out of chronological order on purpose.
    for minute in [10, 30, 20] {
        let mut record = ErrorRecord::new("storefront", format!("at minute {minute}"));
        record.time = (base + Duration::minutes(minute)).fixed_offset();
        log.record(&record).unwrap();
    }

    let (_, entries) = log.fetch_page(0, 10).unwrap();
    let messages: Vec<&str> = entries
        .iter()
        .map(|entry| entry.error.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec!["at minute 30", "at minute 20", "at minute 10"]
    );
}

#[test]
fn pages_walk_the_log_without_overlap() {
    let log = populated_log(25);

    let mut seen = Vec::new();
    for page_index in 0..3 {
        let (_, entries) = log.fetch_page(page_index, 10).unwrap();
        seen.extend(entries.into_iter().map(|entry| entry.id));
    }

    assert_eq!(seen.len(), 25);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 25);
}
