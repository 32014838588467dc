//! Record entry and removal use cases

use chrono::NaiveDate;
use solar_domain::model::{FuelRecord, RecordInput, UnitCatalog, DATE_FORMAT};
use solar_domain::service::preview_estimate;
use solar_store::LogStore;
use solar_types::Result;
use tracing::{debug, info};

/// Entry as collected from the operator; missing date and initial reading
/// are filled in by [`add_record`]
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: Option<String>,
    pub unit_identifier: String,
    pub initial_reading: Option<String>,
    pub final_reading: String,
    pub actual_fuel: String,
}

/// Outcome of the confirm-then-delete protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    NotFound,
}

/// Initial reading suggested for a unit: the final reading of its latest
/// fill-up. Only catalog units are prefilled.
pub fn prefill_initial_reading(store: &LogStore, catalog: &UnitCatalog, unit: &str) -> Option<f64> {
    let unit = unit.trim();
    if !catalog.contains(unit) {
        return None;
    }
    store.last_final_reading(unit)
}

/// Live estimate for a partially typed entry
pub fn preview_for_unit(
    catalog: &UnitCatalog,
    unit: &str,
    initial_reading: Option<f64>,
    final_reading: Option<f64>,
) -> Option<f64> {
    let (meter_kind, ratio) = catalog.resolve(unit.trim());
    preview_estimate(initial_reading, final_reading, ratio, meter_kind)
}

/// Validate, build and store a record.
///
/// The date defaults to `today`; the initial reading defaults to the prefill.
/// On any validation error the store is untouched.
pub fn add_record(
    store: &mut LogStore,
    catalog: &UnitCatalog,
    entry: NewEntry,
    today: NaiveDate,
) -> Result<FuelRecord> {
    let initial_reading = match entry.initial_reading {
        Some(raw) => raw,
        None => prefill_initial_reading(store, catalog, &entry.unit_identifier)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    };

    let input = RecordInput {
        date: entry
            .date
            .unwrap_or_else(|| today.format(DATE_FORMAT).to_string()),
        unit_identifier: entry.unit_identifier,
        initial_reading,
        final_reading: entry.final_reading,
        actual_fuel: entry.actual_fuel,
    };
    debug!(?input, "validating entry");

    let validated = input.validate()?;
    let record = FuelRecord::create(validated, catalog);
    store.insert(record.clone())?;

    info!(
        id = record.id(),
        unit = record.unit_identifier(),
        estimated_fuel = record.estimated_fuel(),
        "record added"
    );
    Ok(record)
}

/// Delete a record once `confirm` approves it.
///
/// `confirm` only runs when the id exists; declining is not an error.
pub fn delete_record<F>(store: &mut LogStore, id: &str, confirm: F) -> Result<DeleteOutcome>
where
    F: FnOnce(&FuelRecord) -> bool,
{
    let Some(record) = store.get(id) else {
        return Ok(DeleteOutcome::NotFound);
    };

    if !confirm(record) {
        debug!(id, "delete cancelled");
        return Ok(DeleteOutcome::Cancelled);
    }

    if store.delete(id)? {
        Ok(DeleteOutcome::Deleted)
    } else {
        Ok(DeleteOutcome::NotFound)
    }
}
