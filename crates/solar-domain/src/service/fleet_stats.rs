//! Fleet-wide statistics and trend series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::FuelRecord;

/// Fleet average above which efficiency is flagged as good
pub const GOOD_EFFICIENCY_THRESHOLD: f64 = 3.0;

/// Totals over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    pub record_count: usize,
    pub total_actual_fuel: f64,
    pub total_usage: f64,
    /// Ratio of sums (`total_usage / total_actual_fuel`), weighted by volume
    pub average_efficiency: f64,
}

impl FleetStats {
    pub fn is_good(&self) -> bool {
        self.average_efficiency > GOOD_EFFICIENCY_THRESHOLD
    }
}

/// One point of the efficiency trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub unit_identifier: String,
    /// Per-record `usage / actual_fuel`, 0 when no fuel was recorded
    pub efficiency: f64,
}

/// Sum fuel and usage and derive the fleet efficiency.
///
/// The average is computed once over the totals, not as a mean of per-record
/// ratios. An empty set or zero total fuel reports 0.
pub fn aggregate<'a, I>(records: I) -> FleetStats
where
    I: IntoIterator<Item = &'a FuelRecord>,
{
    let mut stats = FleetStats::default();
    for record in records {
        stats.record_count += 1;
        stats.total_actual_fuel += record.actual_fuel();
        stats.total_usage += record.usage();
    }

    stats.average_efficiency = if stats.total_actual_fuel > 0.0 {
        stats.total_usage / stats.total_actual_fuel
    } else {
        0.0
    };
    stats
}

/// Per-record efficiency in chronological order.
///
/// Expects records in storage order (newest first) and walks them backwards.
pub fn time_series(records_newest_first: &[FuelRecord]) -> Vec<TrendPoint> {
    records_newest_first
        .iter()
        .rev()
        .map(|record| TrendPoint {
            date: record.date(),
            unit_identifier: record.unit_identifier().to_string(),
            efficiency: record.actual_efficiency().unwrap_or(0.0),
        })
        .collect()
}

/// Search predicate: unit identifier (case-insensitive) OR raw date string.
///
/// `needle_lower` must already be lowercased; `needle` is used as typed
/// against the date.
pub fn matches_search(record: &FuelRecord, needle: &str, needle_lower: &str) -> bool {
    record.unit_identifier().to_lowercase().contains(needle_lower)
        || record.date_string().contains(needle)
}
