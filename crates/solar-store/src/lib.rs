//! Fuel log store
//!
//! Owns the full record collection, keeps it sorted by date (newest first)
//! and writes a snapshot through the injected repository after every change.

use solar_domain::model::FuelRecord;
use solar_domain::repository::RecordSnapshotRepository;
use solar_domain::service::{aggregate, matches_search, time_series, FleetStats, TrendPoint};
use solar_types::Result;
use tracing::{debug, info};

/// Persistent, date-ordered fuel log
pub struct LogStore {
    records: Vec<FuelRecord>,
    repository: Box<dyn RecordSnapshotRepository>,
}

impl LogStore {
    /// Load the snapshot and build the store
    pub fn open(repository: Box<dyn RecordSnapshotRepository>) -> Result<Self> {
        let mut records = repository.load()?;
        sort_newest_first(&mut records);
        debug!(count = records.len(), "fuel log loaded");
        Ok(Self { records, repository })
    }

    /// Persist a candidate collection, then adopt it
    fn commit(&mut self, next: Vec<FuelRecord>) -> Result<()> {
        self.repository.save(&next)?;
        self.records = next;
        info!(count = self.records.len(), "fuel log saved");
        Ok(())
    }

    /// Add a record and re-sort by date.
    ///
    /// Among records sharing a date the newest insertion comes first. If the
    /// snapshot cannot be written the store is left unchanged.
    pub fn insert(&mut self, record: FuelRecord) -> Result<()> {
        debug!(id = record.id(), unit = record.unit_identifier(), "inserting record");
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(record);
        next.extend(self.records.iter().cloned());
        sort_newest_first(&mut next);
        self.commit(next)
    }

    /// Remove a record by id.
    ///
    /// Returns `false` without touching the snapshot when no record matches.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if !self.records.iter().any(|r| r.id() == id) {
            debug!(id, "delete skipped, id not found");
            return Ok(false);
        }
        let next: Vec<FuelRecord> = self
            .records
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        self.commit(next)?;
        debug!(id, "record deleted");
        Ok(true)
    }

    /// Records whose unit contains `term` (any case) or whose date contains `term`
    pub fn filter<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a FuelRecord> + 'a {
        let needle_lower = term.to_lowercase();
        self.records
            .iter()
            .filter(move |r| matches_search(r, term, &needle_lower))
    }

    /// Fleet totals over every record
    pub fn aggregate(&self) -> FleetStats {
        aggregate(&self.records)
    }

    /// Per-record efficiency, oldest first
    pub fn time_series(&self) -> Vec<TrendPoint> {
        time_series(&self.records)
    }

    /// Final reading of the unit's most recent fill-up.
    ///
    /// The newest date wins; on a tie the most recently inserted record wins.
    pub fn last_final_reading(&self, unit_identifier: &str) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.unit_identifier() == unit_identifier)
            .map(|r| r.final_reading())
    }

    /// Up to `limit` most recent records, newest first
    pub fn recent(&self, limit: usize) -> &[FuelRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    pub fn get(&self, id: &str) -> Option<&FuelRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// All records, newest first
    pub fn records(&self) -> &[FuelRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn sort_newest_first(records: &mut [FuelRecord]) {
    // stable: equal dates keep their relative order
    records.sort_by(|a, b| b.date().cmp(&a.date()));
}
