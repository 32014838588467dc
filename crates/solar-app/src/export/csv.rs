//! CSV export

use std::path::Path;

use solar_types::Result;

use super::{record_cells, ReportView, REPORT_HEADERS};

/// Header row, one row per record, then the fleet totals block
pub fn export_to_csv(view: &ReportView<'_>, output_path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)?;

    writer.write_record(REPORT_HEADERS)?;
    for record in &view.records {
        writer.write_record(record_cells(record))?;
    }

    let totals = &view.totals;
    writer.write_record(["Fleet totals"])?;
    for (label, value) in [
        ("Records", totals.record_count.to_string()),
        ("Total Fuel B (Act)", totals.total_actual_fuel.to_string()),
        ("Total Usage", totals.total_usage.to_string()),
        ("Average Efficiency", totals.average_efficiency.to_string()),
    ] {
        writer.write_record([label.to_string(), value])?;
    }

    writer.flush()?;
    Ok(())
}
