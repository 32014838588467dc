//! Excel export functionality

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use solar_types::{Error, Result};

use super::{ReportView, REPORT_HEADERS};

fn excel_err(e: XlsxError) -> Error {
    Error::Export(e.to_string())
}

/// Export a report view to an Excel workbook (Summary + Details sheets)
pub fn export_to_excel(view: &ReportView<'_>, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, view)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, view)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, view: &ReportView<'_>) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "SolarTrack Fuel Report", &header_format)
        .map_err(excel_err)?;

    sheet.write_string(2, 0, "Generated:").map_err(excel_err)?;
    sheet
        .write_string(2, 1, view.generated_on.to_string())
        .map_err(excel_err)?;

    sheet.write_string(3, 0, "Records in report:").map_err(excel_err)?;
    sheet
        .write_number(3, 1, view.records.len() as f64)
        .map_err(excel_err)?;

    sheet
        .write_string_with_format(5, 0, "Fleet totals", &header_format)
        .map_err(excel_err)?;

    let totals = &view.totals;
    let rows = [
        ("Records", totals.record_count as f64),
        ("Total Fuel B (Act)", totals.total_actual_fuel),
        ("Total Usage", totals.total_usage),
        ("Average Efficiency", totals.average_efficiency),
    ];
    for (offset, (label, value)) in rows.iter().enumerate() {
        let row = 6 + offset as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_number(row, 1, *value).map_err(excel_err)?;
    }

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, view: &ReportView<'_>) -> Result<()> {
    sheet.set_name("Details").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, record) in view.records.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet
            .write_string(row, 0, record.date_string())
            .map_err(excel_err)?;
        sheet
            .write_string(row, 1, record.unit_identifier())
            .map_err(excel_err)?;
        sheet
            .write_string(row, 2, record.meter_kind().code())
            .map_err(excel_err)?;

        let numbers = [
            record.initial_reading(),
            record.final_reading(),
            record.usage(),
            record.standard_ratio(),
            record.estimated_fuel(),
            record.actual_fuel(),
        ];
        for (offset, value) in numbers.iter().enumerate() {
            sheet
                .write_number(row, 3 + offset as u16, *value)
                .map_err(excel_err)?;
        }
    }

    sheet.set_column_width(0, 12).map_err(excel_err)?;
    sheet.set_column_width(1, 14).map_err(excel_err)?;

    Ok(())
}
