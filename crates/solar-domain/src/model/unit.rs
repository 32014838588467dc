//! Fleet unit reference data

use serde::{Deserialize, Serialize};
use solar_types::MeterKind;

/// Catalog entry for a fleet unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Unit identifier (e.g., "DT-01")
    pub identifier: String,
    /// KM or HM meter
    #[serde(rename = "type")]
    pub meter_kind: MeterKind,
    /// Baseline ratio from the unit documentation
    pub standard_ratio: f64,
}

impl UnitDefinition {
    pub fn new(identifier: impl Into<String>, meter_kind: MeterKind, standard_ratio: f64) -> Self {
        Self {
            identifier: identifier.into(),
            meter_kind,
            standard_ratio,
        }
    }
}

/// Read-only lookup table of unit definitions, in catalog order
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    units: Vec<UnitDefinition>,
}

impl UnitCatalog {
    /// Build a catalog; a later duplicate identifier replaces the earlier one
    pub fn new(units: Vec<UnitDefinition>) -> Self {
        let mut catalog = Self { units: Vec::with_capacity(units.len()) };
        for unit in units {
            match catalog
                .units
                .iter_mut()
                .find(|u| u.identifier == unit.identifier)
            {
                Some(existing) => *existing = unit,
                None => catalog.units.push(unit),
            }
        }
        catalog
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, identifier: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.identifier == identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    /// Meter kind and ratio for a unit; unknown units fall back to KM with ratio 0
    pub fn resolve(&self, identifier: &str) -> (MeterKind, f64) {
        self.get(identifier)
            .map(|u| (u.meter_kind, u.standard_ratio))
            .unwrap_or((MeterKind::Distance, 0.0))
    }

    /// Autocomplete search: case-insensitive substring on the identifier
    pub fn search(&self, term: &str) -> Vec<&UnitDefinition> {
        let needle = term.to_lowercase();
        self.units
            .iter()
            .filter(|u| u.identifier.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn all(&self) -> &[UnitDefinition] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> UnitCatalog {
        UnitCatalog::new(vec![
            UnitDefinition::new("DT-01", MeterKind::Distance, 3.0),
            UnitDefinition::new("GEN-02", MeterKind::Duration, 2.5),
            UnitDefinition::new("dt-lite", MeterKind::Distance, 9.0),
        ])
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.get("DT-01").is_some());
        assert!(catalog.get("dt-01").is_none());
    }

    #[test]
    fn test_resolve_unknown_defaults() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("GEN-02"), (MeterKind::Duration, 2.5));
        assert_eq!(catalog.resolve("XX-99"), (MeterKind::Distance, 0.0));
    }

    #[test]
    fn test_search_ignores_case() {
        let catalog = catalog();
        let hits: Vec<_> = catalog.search("dt").iter().map(|u| u.identifier.as_str()).collect();
        assert_eq!(hits, vec!["DT-01", "dt-lite"]);
        assert_eq!(catalog.search("").len(), 3);
    }

    #[test]
    fn test_duplicate_identifier_replaces() {
        let catalog = UnitCatalog::new(vec![
            UnitDefinition::new("DT-01", MeterKind::Distance, 3.0),
            UnitDefinition::new("DT-01", MeterKind::Distance, 3.4),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("DT-01").1, 3.4);
    }
}
