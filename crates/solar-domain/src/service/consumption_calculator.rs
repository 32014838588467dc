//! Fuel consumption formulas
//!
//! Distance-metered units carry a km-per-litre ratio, so the expected fuel is
//! `usage / ratio`. Hour-metered units carry a litres-per-hour ratio, so the
//! expected fuel is `usage * ratio`. The two operators must never be swapped.

use solar_types::MeterKind;

/// Meter difference between two readings
pub fn usage(initial_reading: f64, final_reading: f64) -> f64 {
    final_reading - initial_reading
}

/// Expected fuel for a given usage.
///
/// Returns 0 for a non-positive ratio or an invalid usage; a record with a
/// zero estimate is still a valid record.
pub fn estimate(usage: f64, standard_ratio: f64, meter_kind: MeterKind) -> f64 {
    if !standard_ratio.is_finite() || standard_ratio <= 0.0 {
        return 0.0;
    }
    if !usage.is_finite() || usage < 0.0 {
        return 0.0;
    }

    match meter_kind {
        MeterKind::Distance => usage / standard_ratio,
        MeterKind::Duration => usage * standard_ratio,
    }
}

/// Usage per litre actually filled, `None` when no fuel was recorded
pub fn actual_efficiency(usage: f64, actual_fuel: f64) -> Option<f64> {
    if actual_fuel > 0.0 {
        Some(usage / actual_fuel)
    } else {
        None
    }
}

/// Estimate shown while an entry is still being typed.
///
/// Only produced once both readings are present, the final reading is past
/// the initial one and the ratio is usable.
pub fn preview_estimate(
    initial_reading: Option<f64>,
    final_reading: Option<f64>,
    standard_ratio: f64,
    meter_kind: MeterKind,
) -> Option<f64> {
    let (start, end) = (initial_reading?, final_reading?);
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    if standard_ratio > 0.0 && end > start {
        Some(estimate(usage(start, end), standard_ratio, meter_kind))
    } else {
        None
    }
}
