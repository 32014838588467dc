//! Fuel report export (CSV and Excel)
//!
//! Both formats share the column order below and write stored values as-is.

pub mod csv;
pub mod excel;

use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;
use solar_domain::model::{FuelRecord, DATE_FORMAT};
use solar_domain::service::FleetStats;
use solar_types::{Error, Result};
use tracing::info;

/// Report column headers
pub const REPORT_HEADERS: [&str; 9] = [
    "Date",
    "Unit",
    "Type",
    "Initial",
    "Final",
    "Usage",
    "Std Ratio",
    "Fuel A (Est)",
    "Fuel B (Act)",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// What goes into a report: the (possibly filtered) records and fleet totals
#[derive(Debug, Clone)]
pub struct ReportView<'a> {
    pub records: Vec<&'a FuelRecord>,
    pub totals: FleetStats,
    pub generated_on: NaiveDate,
}

/// `Laporan_Solar_<date>.<ext>`
pub fn default_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "Laporan_Solar_{}.{}",
        date.format(DATE_FORMAT),
        format.extension()
    )
}

/// Write the report; an empty view is refused and nothing is written
pub fn export_report(view: &ReportView<'_>, format: ExportFormat, output_path: &Path) -> Result<()> {
    if view.records.is_empty() {
        return Err(Error::Export("No records to export".to_string()));
    }

    match format {
        ExportFormat::Csv => csv::export_to_csv(view, output_path)?,
        ExportFormat::Xlsx => excel::export_to_excel(view, output_path)?,
    }

    info!(
        path = %output_path.display(),
        records = view.records.len(),
        format = format.extension(),
        "report exported"
    );
    Ok(())
}

/// Row cells in header order, as text
fn record_cells(record: &FuelRecord) -> [String; 9] {
    [
        record.date_string(),
        record.unit_identifier().to_string(),
        record.meter_kind().code().to_string(),
        record.initial_reading().to_string(),
        record.final_reading().to_string(),
        record.usage().to_string(),
        record.standard_ratio().to_string(),
        record.estimated_fuel().to_string(),
        record.actual_fuel().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(default_file_name(ExportFormat::Csv, date), "Laporan_Solar_2024-05-03.csv");
        assert_eq!(default_file_name(ExportFormat::Xlsx, date), "Laporan_Solar_2024-05-03.xlsx");
    }
}
