//! Built-in fleet unit catalog
//!
//! KM units: ratio is km per litre. HM units: ratio is litres per hour.

use solar_domain::model::{UnitCatalog, UnitDefinition};
use solar_types::MeterKind;

/// (identifier, meter kind, standard ratio)
pub const BUILTIN_UNITS: &[(&str, MeterKind, f64)] = &[
    // Dump trucks and light vehicles
    ("DT-01", MeterKind::Distance, 3.0),
    ("DT-02", MeterKind::Distance, 2.8),
    ("LV-01", MeterKind::Distance, 8.5),
    ("WT-01", MeterKind::Distance, 2.2),
    // Generators
    ("GEN-01", MeterKind::Duration, 2.0),
    ("GEN-02", MeterKind::Duration, 2.5),
    // Heavy equipment
    ("EX-01", MeterKind::Duration, 14.0),
    ("WL-01", MeterKind::Duration, 12.0),
    ("GR-01", MeterKind::Duration, 15.0),
    ("CR-01", MeterKind::Duration, 9.0),
];

pub fn builtin_catalog() -> UnitCatalog {
    UnitCatalog::new(
        BUILTIN_UNITS
            .iter()
            .map(|(id, kind, ratio)| UnitDefinition::new(*id, *kind, *ratio))
            .collect(),
    )
}
