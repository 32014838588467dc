//! Record entry, deletion, queries and analysis wiring against a real data dir

use chrono::NaiveDate;
use solar_app::app::analysis_service::analyze_fleet_with;
use solar_app::app::{
    add_record, delete_record, fleet_stats, list_records, prefill_initial_reading,
    preview_for_unit, search_units, trend, DeleteOutcome, NewEntry,
};
use solar_app::config::Config;
use solar_app::constants::builtin_catalog;
use solar_app::repository::open_log_store_at;
use solar_types::{AnalysisStatus, Error, MeterKind, ValidationError};
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn entry(date: &str, unit: &str, initial: Option<&str>, final_: &str, fuel: &str) -> NewEntry {
    NewEntry {
        date: Some(date.to_string()),
        unit_identifier: unit.to_string(),
        initial_reading: initial.map(str::to_string),
        final_reading: final_.to_string(),
        actual_fuel: fuel.to_string(),
    }
}

#[test]
fn test_add_record_computes_estimate() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let catalog = builtin_catalog();

    let record = add_record(
        &mut store,
        &catalog,
        entry("2024-05-01", "DT-01", Some("100"), "250", "40"),
        today(),
    )
    .unwrap();

    assert_eq!(record.meter_kind(), MeterKind::Distance);
    assert!((record.usage() - 150.0).abs() < 1e-9);
    assert!((record.estimated_fuel() - 50.0).abs() < 1e-9);
    assert!((record.actual_efficiency().unwrap() - 3.75).abs() < 1e-9);
    assert_eq!(store.count(), 1);
}

#[test]
fn test_missing_date_uses_today() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let mut new_entry = entry("", "GEN-02", Some("10"), "15", "10");
    new_entry.date = None;

    let record = add_record(&mut store, &builtin_catalog(), new_entry, today()).unwrap();
    assert_eq!(record.date_string(), "2024-05-10");
    assert!((record.estimated_fuel() - 12.5).abs() < 1e-9);
}

#[test]
fn test_initial_reading_prefilled_from_last_final() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let catalog = builtin_catalog();

    add_record(&mut store, &catalog, entry("2024-05-01", "DT-01", Some("100"), "250", "40"), today())
        .unwrap();
    assert_eq!(prefill_initial_reading(&store, &catalog, "DT-01"), Some(250.0));

    let record = add_record(&mut store, &catalog, entry("2024-05-02", "DT-01", None, "400", "45"), today())
        .unwrap();
    assert!((record.initial_reading() - 250.0).abs() < 1e-9);
    assert!((record.usage() - 150.0).abs() < 1e-9);
}

#[test]
fn test_no_prefill_for_unknown_unit() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let catalog = builtin_catalog();

    add_record(&mut store, &catalog, entry("2024-05-01", "Pickup X", Some("0"), "100", "20"), today())
        .unwrap();
    assert_eq!(prefill_initial_reading(&store, &catalog, "Pickup X"), None);

    let err = add_record(&mut store, &catalog, entry("2024-05-02", "Pickup X", None, "200", "20"), today())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(_))
    ));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_unknown_unit_stored_with_zero_estimate() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();

    let record = add_record(
        &mut store,
        &builtin_catalog(),
        entry("2024-05-01", "Pickup X", Some("0"), "100", "20"),
        today(),
    )
    .unwrap();

    assert_eq!(record.meter_kind(), MeterKind::Distance);
    assert_eq!(record.standard_ratio(), 0.0);
    assert_eq!(record.estimated_fuel(), 0.0);
}

#[test]
fn test_final_before_initial_rejected() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();

    let err = add_record(
        &mut store,
        &builtin_catalog(),
        entry("2024-05-01", "DT-01", Some("80"), "50", "10"),
        today(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::FinalBeforeInitial { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn test_preview_only_when_meaningful() {
    let catalog = builtin_catalog();
    assert_eq!(preview_for_unit(&catalog, "DT-01", Some(100.0), Some(250.0)), Some(50.0));
    assert_eq!(preview_for_unit(&catalog, "DT-01", Some(100.0), Some(100.0)), None);
    assert_eq!(preview_for_unit(&catalog, "DT-01", Some(100.0), None), None);
    assert_eq!(preview_for_unit(&catalog, "Pickup X", Some(0.0), Some(100.0)), None);
}

#[test]
fn test_delete_flow() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let record = add_record(
        &mut store,
        &builtin_catalog(),
        entry("2024-05-01", "DT-01", Some("100"), "250", "40"),
        today(),
    )
    .unwrap();

    let outcome = delete_record(&mut store, record.id(), |_| false).unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(store.count(), 1);

    let outcome = delete_record(&mut store, "no-such-id", |_| panic!("not asked")).unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound);

    let outcome = delete_record(&mut store, record.id(), |r| r.unit_identifier() == "DT-01").unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(store.is_empty());

    let reopened = open_log_store_at(dir.path().to_path_buf()).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn test_queries_over_search_view() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let catalog = builtin_catalog();

    add_record(&mut store, &catalog, entry("2024-05-01", "DT-01", Some("100"), "250", "40"), today())
        .unwrap();
    add_record(&mut store, &catalog, entry("2024-05-02", "GEN-02", Some("10"), "15", "10"), today())
        .unwrap();
    add_record(&mut store, &catalog, entry("2024-05-03", "DT-01", Some("250"), "400", "50"), today())
        .unwrap();

    let dt = list_records(&store, Some("dt"), None);
    assert_eq!(dt.len(), 2);
    assert_eq!(dt[0].date_string(), "2024-05-03");

    assert_eq!(list_records(&store, None, Some(1)).len(), 1);
    assert_eq!(list_records(&store, Some("2024-05-02"), None).len(), 1);

    let all = fleet_stats(&store, None);
    assert_eq!(all.record_count, 3);
    assert!((all.total_actual_fuel - 100.0).abs() < 1e-9);
    assert!((all.total_usage - 305.0).abs() < 1e-9);

    let dt_stats = fleet_stats(&store, Some("DT"));
    assert!((dt_stats.average_efficiency - 300.0 / 90.0).abs() < 1e-9);

    let points = trend(&store, Some("dt-01"));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date.to_string(), "2024-05-01");
    assert!((points[0].efficiency - 3.75).abs() < 1e-9);
    assert!((points[1].efficiency - 3.0).abs() < 1e-9);
}

#[test]
fn test_unit_search_is_case_insensitive() {
    let catalog = builtin_catalog();
    let hits = search_units(&catalog, Some("gen"));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|u| u.identifier.starts_with("GEN-")));
    assert_eq!(search_units(&catalog, None).len(), catalog.len());
}

#[test]
fn test_analysis_without_backend_falls_back() {
    let dir = tempdir().unwrap();
    let mut store = open_log_store_at(dir.path().to_path_buf()).unwrap();
    let config = Config::default();

    let empty = analyze_fleet_with(&store, &config, None);
    assert_eq!(empty, solar_ai::insufficient_data_result());

    add_record(&mut store, &builtin_catalog(), entry("2024-05-01", "DT-01", Some("100"), "250", "40"), today())
        .unwrap();
    let result = analyze_fleet_with(&store, &config, None);
    assert_eq!(result.status, AnalysisStatus::Average);
    assert_eq!(result, solar_ai::unavailable_result());
}
