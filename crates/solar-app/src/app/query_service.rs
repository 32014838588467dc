//! Read-only queries over the fuel log and unit catalog

use solar_domain::model::{FuelRecord, UnitCatalog, UnitDefinition};
use solar_domain::service::{aggregate, time_series, FleetStats, TrendPoint};
use solar_store::LogStore;

/// Filtered records, newest first, optionally capped at `limit`
pub fn list_records<'a>(
    store: &'a LogStore,
    search: Option<&'a str>,
    limit: Option<usize>,
) -> Vec<&'a FuelRecord> {
    let records = store.filter(search.unwrap_or(""));
    match limit {
        Some(n) => records.take(n).collect(),
        None => records.collect(),
    }
}

/// Fleet totals, over the search view when a term is given
pub fn fleet_stats(store: &LogStore, search: Option<&str>) -> FleetStats {
    match search {
        Some(term) => aggregate(store.filter(term)),
        None => store.aggregate(),
    }
}

/// Efficiency trend, oldest first
pub fn trend(store: &LogStore, search: Option<&str>) -> Vec<TrendPoint> {
    match search {
        Some(term) => {
            let view: Vec<FuelRecord> = store.filter(term).cloned().collect();
            time_series(&view)
        }
        None => store.time_series(),
    }
}

/// Autocomplete: catalog units whose identifier contains `term` (any case)
pub fn search_units<'a>(catalog: &'a UnitCatalog, term: Option<&str>) -> Vec<&'a UnitDefinition> {
    match term {
        Some(term) => catalog.search(term),
        None => catalog.all().iter().collect(),
    }
}
