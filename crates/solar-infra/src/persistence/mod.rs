//! Persistence implementations
//!
//! Snapshot repositories for the fuel log.

mod file_snapshot_repo;
mod memory_snapshot_repo;

pub use file_snapshot_repo::FileSnapshotRepository;
pub use memory_snapshot_repo::MemorySnapshotRepository;
