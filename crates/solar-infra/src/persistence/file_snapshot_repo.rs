//! File-based snapshot repository
//!
//! The whole log lives in one pretty-printed JSON array, rewritten on every save.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use solar_domain::model::FuelRecord;
use solar_domain::repository::RecordSnapshotRepository;
use solar_types::{Error, Result};
use tracing::debug;

const SNAPSHOT_FILE: &str = "records.json";

/// JSON snapshot stored at `<store_dir>/records.json`
pub struct FileSnapshotRepository {
    store_path: PathBuf,
}

impl FileSnapshotRepository {
    /// Create the store directory if needed
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join(SNAPSHOT_FILE),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl RecordSnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> std::result::Result<Vec<FuelRecord>, Error> {
        if !self.store_path.exists() {
            debug!(path = %self.store_path.display(), "no snapshot yet");
            return Ok(Vec::new());
        }

        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        // a corrupt snapshot is an error, never silently replaced by an empty log
        let records: Vec<FuelRecord> = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn save(&self, records: &[FuelRecord]) -> std::result::Result<(), Error> {
        // write beside the target, then swap it in
        let tmp_path = self.store_path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.store_path)?;
        debug!(path = %self.store_path.display(), count = records.len(), "snapshot written");
        Ok(())
    }
}
