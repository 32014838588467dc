//! Use cases driven by the CLI

pub mod analysis_service;
pub mod query_service;
pub mod record_service;

pub use analysis_service::{analyze_fleet, build_backend};
pub use query_service::{fleet_stats, list_records, search_units, trend};
pub use record_service::{
    add_record, delete_record, prefill_initial_reading, preview_for_unit, DeleteOutcome, NewEntry,
};
