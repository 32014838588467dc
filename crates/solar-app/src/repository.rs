//! Wiring between config and the persistence layer

use std::path::PathBuf;

use solar_domain::model::{UnitCatalog, UnitDefinition};
use solar_infra::persistence::FileSnapshotRepository;
use solar_infra::unit_catalog_loader;
use solar_store::LogStore;
use solar_types::Result;
use tracing::debug;

use crate::config::Config;
use crate::constants::builtin_catalog;

/// Open the fuel log in the configured data directory
pub fn open_log_store(config: &Config) -> Result<LogStore> {
    open_log_store_at(config.data_dir()?)
}

/// Open the fuel log at a custom directory
pub fn open_log_store_at(store_dir: PathBuf) -> Result<LogStore> {
    let repository = FileSnapshotRepository::open(store_dir)?;
    LogStore::open(Box::new(repository))
}

/// Built-in catalog, with entries from `catalog_path` added or replacing
/// built-in units of the same identifier
pub fn load_catalog(config: &Config) -> Result<UnitCatalog> {
    let builtin = builtin_catalog();
    let Some(ref path) = config.catalog_path else {
        return Ok(builtin);
    };

    let overrides = unit_catalog_loader::load_from_file(path)?;
    debug!(path = %path.display(), units = overrides.len(), "unit catalog override loaded");

    let units: Vec<UnitDefinition> = builtin
        .all()
        .iter()
        .chain(overrides.all())
        .cloned()
        .collect();
    Ok(UnitCatalog::new(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_types::MeterKind;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_catalog_without_override() {
        let catalog = load_catalog(&Config::default()).unwrap();
        assert!(catalog.contains("DT-01"));
    }

    #[test]
    fn test_override_file_extends_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("units.csv");
        std::fs::write(&path, "identifier,type,ratio\nDT-01,KM,3.4\nPU-09,KM,9.0\n").unwrap();

        let config = Config {
            catalog_path: Some(path),
            ..Config::default()
        };
        let catalog = load_catalog(&config).unwrap();

        assert_eq!(catalog.resolve("DT-01"), (MeterKind::Distance, 3.4));
        assert_eq!(catalog.resolve("PU-09"), (MeterKind::Distance, 9.0));
        assert!(catalog.contains("GEN-02"));
    }
}
