//! Boot — logging init, config load, scan, store construction.

use std::path::Path;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::{ConfError, IngestConfig};
use crate::scan;
use crate::store::RecordStore;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load config, run the one full scan, and build the record store.
///
/// The store is read-only from here on; what to do with an empty one is the
/// serving layer's decision, not ours.
pub fn boot() -> Result<(RecordStore, IngestConfig), ConfError> {
    let config = IngestConfig::load()?;
    config.validate().map_err(ConfError::Invalid)?;
    info!(
        "Loaded configuration: logs_root={}, log_extension={}",
        config.logs_root, config.log_extension
    );

    let (records, summary) =
        scan::scan_root(Path::new(&config.logs_root), &config.log_extension);
    info!(
        "Scan complete: {} entries from {} files ({} failed)",
        summary.records, summary.files_seen, summary.files_failed
    );

    Ok((RecordStore::new(records), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_boot_scans_configured_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("app.log"),
            "2025-12-18 00:00:03.5805 TRACE Start function A.B\n",
        )
        .unwrap();

        std::env::set_var("INGEST_LOGS_ROOT", dir.path());
        let result = boot();
        std::env::remove_var("INGEST_LOGS_ROOT");

        let (store, config) = result.unwrap();
        assert_eq!(config.logs_root, dir.path().to_string_lossy());
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().total_files, 1);
    }
}
