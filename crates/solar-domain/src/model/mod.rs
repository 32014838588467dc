//! Domain model types

pub mod fuel_record;
pub mod unit;

pub use fuel_record::{FuelRecord, RecordInput, ValidatedEntry, DATE_FORMAT};
pub use unit::{UnitCatalog, UnitDefinition};
