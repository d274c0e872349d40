//! History store tests — persistence round-trips and ordering.

use roi_core::engine;
use roi_core::input::CalculationInput;
use roi_core::store::RoiStore;
use roi_core::types::RecordSource;

fn open_store() -> RoiStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = RoiStore::in_memory().unwrap();
    store.migrate().unwrap();
    store
}

fn scenario(name: &str, volume: f64) -> CalculationInput {
    CalculationInput {
        scenario_name: name.to_string(),
        monthly_invoice_volume: volume,
        ..CalculationInput::example()
    }
}

/// Saving then listing returns the same input and result, with a generated
/// id and timestamp attached by the store.
#[test]
fn save_then_list_round_trips() {
    let store = open_store();
    let input = CalculationInput::example();
    let result = engine::compute(&input).unwrap();

    let record_id = store
        .save_calculation(&input, &result, RecordSource::Form)
        .unwrap();

    let records = store.list_recent(10).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.record_id, record_id);
    assert_eq!(record.source, RecordSource::Form);
    assert_eq!(record.input, input);
    assert_eq!(record.result, result);
}

/// list_recent returns the most recent records first.
#[test]
fn list_recent_returns_newest_first() {
    let store = open_store();
    for (name, volume) in [("first", 100.0), ("second", 200.0), ("third", 300.0)] {
        let input = scenario(name, volume);
        let result = engine::compute(&input).unwrap();
        store
            .save_calculation(&input, &result, RecordSource::Form)
            .unwrap();
    }

    let records = store.list_recent(10).unwrap();
    let names: Vec<&str> = records
        .iter()
        .map(|r| r.input.scenario_name.as_str())
        .collect();
    assert_eq!(names, vec!["third", "second", "first"]);
}

/// The limit caps the number of returned records.
#[test]
fn list_recent_respects_limit() {
    let store = open_store();
    for i in 0..5 {
        let input = scenario(&format!("run-{i}"), 100.0 + i as f64);
        let result = engine::compute(&input).unwrap();
        store
            .save_calculation(&input, &result, RecordSource::Form)
            .unwrap();
    }

    assert_eq!(store.list_recent(3).unwrap().len(), 3);
    assert_eq!(store.count().unwrap(), 5);
}

/// The source tag distinguishes legacy submissions in history.
#[test]
fn source_tag_round_trips() {
    let store = open_store();
    let input = CalculationInput::example();
    let result = engine::compute(&input).unwrap();

    store
        .save_calculation(&input, &result, RecordSource::Legacy)
        .unwrap();

    let records = store.list_recent(1).unwrap();
    assert_eq!(records[0].source, RecordSource::Legacy);
}

/// A save against a missing schema surfaces a database error instead of
/// panicking — storage failures are the caller's to report.
#[test]
fn save_without_migration_fails_with_database_error() {
    let store = RoiStore::in_memory().unwrap();
    let input = CalculationInput::example();
    let result = engine::compute(&input).unwrap();

    let err = store
        .save_calculation(&input, &result, RecordSource::Form)
        .unwrap_err();
    assert!(
        matches!(err, roi_core::error::RoiError::Database(_)),
        "expected Database error, got {err:?}"
    );
}

/// An empty store lists no records.
#[test]
fn empty_store_lists_nothing() {
    let store = open_store();
    assert!(store.list_recent(10).unwrap().is_empty());
    assert_eq!(store.count().unwrap(), 0);
}
