//! In-memory snapshot repository
//!
//! Used by tests; nothing touches the disk.

use std::cell::RefCell;

use solar_domain::model::FuelRecord;
use solar_domain::repository::RecordSnapshotRepository;
use solar_types::Error;

#[derive(Debug, Default)]
pub struct MemorySnapshotRepository {
    records: RefCell<Vec<FuelRecord>>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn with_records(records: Vec<FuelRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl RecordSnapshotRepository for MemorySnapshotRepository {
    fn load(&self) -> Result<Vec<FuelRecord>, Error> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[FuelRecord]) -> Result<(), Error> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
