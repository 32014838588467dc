//! Repository trait definitions for data persistence

use solar_types::Error;

use crate::model::FuelRecord;

/// Whole-log snapshot persistence.
///
/// The log is loaded once at startup and written back in full after every
/// insert or delete.
pub trait RecordSnapshotRepository {
    /// Load the stored records in their saved order; empty when nothing was saved yet
    fn load(&self) -> Result<Vec<FuelRecord>, Error>;

    /// Replace the stored snapshot
    fn save(&self, records: &[FuelRecord]) -> Result<(), Error>;
}
