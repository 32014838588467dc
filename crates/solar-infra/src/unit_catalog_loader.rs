//! Unit catalog loader from TOML or CSV files
//!
//! TOML layout:
//!
//! ```toml
//! [[units]]
//! identifier = "DT-01"
//! type = "KM"
//! standard_ratio = 3.0
//! ```
//!
//! CSV layout: a header row followed by `identifier,type,ratio` rows.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use solar_domain::model::{UnitCatalog, UnitDefinition};
use solar_types::{ConfigError, Error, MeterKind, Result};
use tracing::warn;

/// Container for parsing units.toml
#[derive(Debug, Deserialize)]
struct UnitCatalogFile {
    units: Vec<UnitDefinition>,
}

#[derive(Debug, Deserialize)]
struct CsvUnitRow {
    identifier: String,
    #[serde(rename = "type")]
    meter_type: String,
    ratio: f64,
}

/// Load a catalog file, picking the parser from the extension
pub fn load_from_file(path: &Path) -> Result<UnitCatalog> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => {
            let content = fs::read_to_string(path)?;
            load_from_csv_str(&content)
        }
        Some("toml") => {
            let content = fs::read_to_string(path)?;
            load_from_toml_str(&content)
        }
        _ => Err(Error::Config(ConfigError::ParseError(format!(
            "Unsupported catalog file (expected .toml or .csv): {}",
            path.display()
        )))),
    }
}

/// Load unit definitions from a TOML string
pub fn load_from_toml_str(toml_content: &str) -> Result<UnitCatalog> {
    let file: UnitCatalogFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse unit catalog TOML: {}",
            e
        )))
    })?;

    Ok(UnitCatalog::new(keep_usable(file.units)))
}

/// Load unit definitions from CSV text with an `identifier,type,ratio` header
pub fn load_from_csv_str(csv_content: &str) -> Result<UnitCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut units = Vec::new();
    for (line, row) in reader.deserialize::<CsvUnitRow>().enumerate() {
        let row = row?;
        match MeterKind::from_code(&row.meter_type) {
            Some(meter_kind) => units.push(UnitDefinition::new(row.identifier, meter_kind, row.ratio)),
            None => warn!(
                line = line + 2,
                meter_type = %row.meter_type,
                "skipping unit with unknown meter type"
            ),
        }
    }

    Ok(UnitCatalog::new(keep_usable(units)))
}

fn keep_usable(units: Vec<UnitDefinition>) -> Vec<UnitDefinition> {
    units
        .into_iter()
        .filter(|u| {
            let usable = !u.identifier.trim().is_empty()
                && u.standard_ratio.is_finite()
                && u.standard_ratio > 0.0;
            if !usable {
                warn!(unit = %u.identifier, ratio = u.standard_ratio, "skipping unusable unit definition");
            }
            usable
        })
        .collect()
}
