//! Output formatting module

use serde::Serialize;
use solar_domain::model::{FuelRecord, UnitDefinition};
use solar_domain::service::{FleetStats, TrendPoint, GOOD_EFFICIENCY_THRESHOLD};
use solar_types::{AnalysisResult, OutputFormat, Result};

/// JSON view of a record with its derived efficiency
#[derive(Serialize)]
struct RecordView<'a> {
    #[serde(flatten)]
    record: &'a FuelRecord,
    actual_efficiency: Option<f64>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn efficiency_text(record: &FuelRecord) -> String {
    match record.actual_efficiency() {
        Some(e) => format!("{:.2}", e),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

pub fn output_record(output_format: OutputFormat, record: &FuelRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&RecordView {
            record,
            actual_efficiency: record.actual_efficiency(),
        });
    }

    println!("\nFuel Record");
    println!("===========");
    println!("Id:              {}", record.id());
    println!("Date:            {}", record.date_string());
    println!("Unit:            {} ({})", record.unit_identifier(), record.meter_kind());
    println!(
        "Readings:        {} -> {} (usage {:.1})",
        record.initial_reading(),
        record.final_reading(),
        record.usage()
    );
    println!(
        "Std ratio:       {} ({})",
        record.standard_ratio(),
        record.meter_kind().formula()
    );
    println!("Fuel A (Est):    {:.2} L", record.estimated_fuel());
    println!("Fuel B (Act):    {:.2} L", record.actual_fuel());
    println!("Efficiency:      {}", efficiency_text(record));

    if record.standard_ratio() <= 0.0 {
        println!("\nNote: unit not in catalog, no estimate available");
    }

    Ok(())
}

pub fn output_records(output_format: OutputFormat, records: &[&FuelRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let views: Vec<RecordView> = records
            .iter()
            .map(|r| RecordView {
                record: r,
                actual_efficiency: r.actual_efficiency(),
            })
            .collect();
        return print_json(&views);
    }

    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    println!(
        "{:<36}  {:<10}  {:<12}  {:<2}  {:>10}  {:>10}  {:>8}  {:>9}  {:>9}  {:>6}",
        "Id", "Date", "Unit", "", "Initial", "Final", "Usage", "Fuel A", "Fuel B", "Eff"
    );
    println!("{}", "-".repeat(130));
    for r in records {
        println!(
            "{:<36}  {:<10}  {:<12}  {:<2}  {:>10}  {:>10}  {:>8.1}  {:>9.2}  {:>9.2}  {:>6}",
            r.id(),
            r.date_string(),
            truncate(r.unit_identifier(), 12),
            r.meter_kind().code(),
            r.initial_reading(),
            r.final_reading(),
            r.usage(),
            r.estimated_fuel(),
            r.actual_fuel(),
            efficiency_text(r),
        );
    }
    println!("\n{} record(s)", records.len());

    Ok(())
}

pub fn output_stats(output_format: OutputFormat, stats: &FleetStats) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(stats);
    }

    let badge = if stats.is_good() { "good" } else { "watch" };

    println!("\nFleet Statistics");
    println!("================");
    println!("Records:            {}", stats.record_count);
    println!("Total fuel (act):   {:.1} L", stats.total_actual_fuel);
    println!("Total usage:        {:.1}", stats.total_usage);
    println!(
        "Average efficiency: {:.2} [{}] (threshold {:.1})",
        stats.average_efficiency, badge, GOOD_EFFICIENCY_THRESHOLD
    );

    Ok(())
}

pub fn output_trend(output_format: OutputFormat, points: &[TrendPoint]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(points);
    }

    if points.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    let max = points
        .iter()
        .map(|p| p.efficiency)
        .fold(0.0_f64, f64::max);

    println!("{:<10}  {:<12}  {:>6}", "Date", "Unit", "Eff");
    println!("{}", "-".repeat(60));
    for p in points {
        let bar_len = if max > 0.0 {
            ((p.efficiency / max) * 30.0).round() as usize
        } else {
            0
        };
        println!(
            "{:<10}  {:<12}  {:>6.2}  {}",
            p.date.to_string(),
            truncate(&p.unit_identifier, 12),
            p.efficiency,
            "#".repeat(bar_len)
        );
    }

    Ok(())
}

pub fn output_analysis(output_format: OutputFormat, result: &AnalysisResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }

    println!("\nEfficiency Analysis");
    println!("===================");
    println!("Status: {}", result.status.label());
    println!("\n{}", result.summary);

    if !result.recommendations.is_empty() {
        println!("\nRecommendations:");
        for (i, rec) in result.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }

    Ok(())
}

pub fn output_units(output_format: OutputFormat, units: &[&UnitDefinition]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(units);
    }

    if units.is_empty() {
        println!("No matching units.");
        return Ok(());
    }

    println!("{:<12}  {:<4}  {:>9}  {}", "Unit", "Type", "Std Ratio", "Estimate");
    println!("{}", "-".repeat(48));
    for u in units {
        println!(
            "{:<12}  {:<4}  {:>9}  {}",
            u.identifier,
            u.meter_kind.code(),
            u.standard_ratio,
            u.meter_kind.formula()
        );
    }

    Ok(())
}
