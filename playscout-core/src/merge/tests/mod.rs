//! Unit tests for merging fetched attractions into a store.

use super::*;
use crate::FetchFailure;
use crate::test_support::{MemoryStore, MemoryStoreError, StubFetcher, sample_attraction};
use rstest::rstest;


fn exhausted() -> FetchError {
    FetchError::Exhausted {
        attempts: 3,
        last_failure: FetchFailure::HttpStatus {
            url: "https://overpass.example/api/interpreter".to_owned(),
            status: 500,
        },
    }
}

#[rstest]
fn reports_counts_and_saves_once() {
    let store = MemoryStore::with_records([sample_attraction("Tierpark", 52.5, 13.5)]);
    let fetcher = StubFetcher::with_records(vec![
        sample_attraction("Tierpark", 1.0, 1.0),
        sample_attraction("Aquarium", 52.5, 13.3),
    ]);

    let report = merge_city("berlin", &fetcher, &store).expect("merge succeeds");

    assert_eq!(
        report,
        MergeReport {
            city: "berlin".to_owned(),
            fetched: 2,
            added: 1,
            total: 2,
            fetch_error: None,
        }
    );
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(store.save_count(), 1);
}

#[rstest]
fn exhausted_fetch_adds_nothing_but_still_saves() {
    let store = MemoryStore::with_records([sample_attraction("Tierpark", 52.5, 13.5)]);
    let fetcher = StubFetcher::with_error(exhausted());

    let report = merge_city("berlin", &fetcher, &store).expect("fetch errors are absorbed");

    assert_eq!(report.added, 0);
    assert_eq!(report.total, 1);
    assert_eq!(report.fetch_error, Some(exhausted()));
    assert_eq!(store.save_count(), 1);
}

#[rstest]
fn load_failure_propagates_without_fetching() {
    let store = MemoryStore::default().failing_load();
    let fetcher = StubFetcher::with_records(vec![sample_attraction("A", 0.0, 0.0)]);

    let err = merge_city("berlin", &fetcher, &store).expect_err("load should fail");

    assert!(matches!(err, MergeError::Load(MemoryStoreError::LoadRefused)));
    assert_eq!(fetcher.calls(), 0);
}

#[rstest]
fn save_failure_propagates() {
    let store = MemoryStore::default().failing_save();
    let fetcher = StubFetcher::with_records(vec![sample_attraction("A", 0.0, 0.0)]);

    let err = merge_city("berlin", &fetcher, &store).expect_err("save should fail");

    assert!(matches!(err, MergeError::Save(MemoryStoreError::SaveRefused)));
    assert!(store.snapshot().is_empty());
}
