//! Fuel fill-up records and their construction path

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use solar_types::{MeterKind, ValidationError};
use tracing::warn;

use crate::model::UnitCatalog;
use crate::service::consumption_calculator::{actual_efficiency, estimate, usage};

/// Date format used for input, storage and search
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw entry as typed by the operator
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub date: String,
    pub unit_identifier: String,
    pub initial_reading: String,
    pub final_reading: String,
    pub actual_fuel: String,
}

/// Entry whose fields have all been parsed and checked
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEntry {
    pub date: NaiveDate,
    pub unit_identifier: String,
    pub initial_reading: f64,
    pub final_reading: f64,
    pub actual_fuel: f64,
}

impl RecordInput {
    /// Parse and check every field.
    ///
    /// Rejections happen before anything is built, so a failed entry never
    /// reaches the log.
    pub fn validate(&self) -> Result<ValidatedEntry, ValidationError> {
        let date = parse_date(&self.date)?;

        let unit_identifier = self.unit_identifier.trim();
        if unit_identifier.is_empty() {
            return Err(ValidationError::MissingField("unit"));
        }

        let initial_reading = parse_non_negative("initial reading", &self.initial_reading)?;
        let final_reading = parse_non_negative("final reading", &self.final_reading)?;
        let actual_fuel = parse_non_negative("actual fuel", &self.actual_fuel)?;

        if final_reading < initial_reading {
            return Err(ValidationError::FinalBeforeInitial {
                initial_reading,
                final_reading,
            });
        }

        Ok(ValidatedEntry {
            date,
            unit_identifier: unit_identifier.to_string(),
            initial_reading,
            final_reading,
            actual_fuel,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField("date"));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: raw.to_string(),
        })?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field, value });
    }
    Ok(value)
}

/// One fill-up event.
///
/// Derived fields (`usage`, `standard_ratio`, `estimated_fuel`) are fixed at
/// creation and never recomputed, so later catalog edits leave history intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct FuelRecord {
    id: String,
    date: NaiveDate,
    unit_identifier: String,
    meter_kind: MeterKind,
    initial_reading: f64,
    final_reading: f64,
    usage: f64,
    standard_ratio: f64,
    estimated_fuel: f64,
    actual_fuel: f64,
}

impl FuelRecord {
    /// Build a record from a validated entry, snapshotting the catalog values
    pub fn create(entry: ValidatedEntry, catalog: &UnitCatalog) -> Self {
        if !catalog.contains(&entry.unit_identifier) {
            warn!(
                unit = %entry.unit_identifier,
                "unit not in catalog, using KM meter with ratio 0"
            );
        }
        let (meter_kind, standard_ratio) = catalog.resolve(&entry.unit_identifier);
        let usage = usage(entry.initial_reading, entry.final_reading);
        let estimated_fuel = estimate(usage, standard_ratio, meter_kind);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: entry.date,
            unit_identifier: entry.unit_identifier,
            meter_kind,
            initial_reading: entry.initial_reading,
            final_reading: entry.final_reading,
            usage,
            standard_ratio,
            estimated_fuel,
            actual_fuel: entry.actual_fuel,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date as stored and searched (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn unit_identifier(&self) -> &str {
        &self.unit_identifier
    }

    pub fn meter_kind(&self) -> MeterKind {
        self.meter_kind
    }

    pub fn initial_reading(&self) -> f64 {
        self.initial_reading
    }

    pub fn final_reading(&self) -> f64 {
        self.final_reading
    }

    pub fn usage(&self) -> f64 {
        self.usage
    }

    pub fn standard_ratio(&self) -> f64 {
        self.standard_ratio
    }

    pub fn estimated_fuel(&self) -> f64 {
        self.estimated_fuel
    }

    pub fn actual_fuel(&self) -> f64 {
        self.actual_fuel
    }

    /// Usage per litre actually filled; not stored
    pub fn actual_efficiency(&self) -> Option<f64> {
        actual_efficiency(self.usage, self.actual_fuel)
    }
}

/// Record as read back from a snapshot, before its invariants are checked
#[derive(Deserialize)]
struct StoredRecord {
    id: String,
    date: NaiveDate,
    unit_identifier: String,
    meter_kind: MeterKind,
    initial_reading: f64,
    final_reading: f64,
    usage: f64,
    standard_ratio: f64,
    estimated_fuel: f64,
    actual_fuel: f64,
}

impl TryFrom<StoredRecord> for FuelRecord {
    type Error = ValidationError;

    fn try_from(raw: StoredRecord) -> Result<Self, Self::Error> {
        let reject = |reason: String| ValidationError::InconsistentRecord {
            id: raw.id.clone(),
            reason,
        };

        for (field, value) in [
            ("initial_reading", raw.initial_reading),
            ("final_reading", raw.final_reading),
            ("usage", raw.usage),
            ("standard_ratio", raw.standard_ratio),
            ("estimated_fuel", raw.estimated_fuel),
            ("actual_fuel", raw.actual_fuel),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(reject(format!("{} is {}", field, value)));
            }
        }
        if raw.final_reading < raw.initial_reading {
            return Err(reject(format!(
                "final reading {} is before initial reading {}",
                raw.final_reading, raw.initial_reading
            )));
        }
        if raw.usage != usage(raw.initial_reading, raw.final_reading) {
            return Err(reject(format!(
                "usage {} does not match readings {} -> {}",
                raw.usage, raw.initial_reading, raw.final_reading
            )));
        }

        Ok(Self {
            id: raw.id,
            date: raw.date,
            unit_identifier: raw.unit_identifier,
            meter_kind: raw.meter_kind,
            initial_reading: raw.initial_reading,
            final_reading: raw.final_reading,
            usage: raw.usage,
            standard_ratio: raw.standard_ratio,
            estimated_fuel: raw.estimated_fuel,
            actual_fuel: raw.actual_fuel,
        })
    }
}
