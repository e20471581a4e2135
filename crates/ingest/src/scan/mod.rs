//! Scan — recursive log discovery, dispatch, and aggregation.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::parser::{detect_format, parser_for, LogRecord};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Counters for one full scan, reported on the boot log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_seen: usize,
    pub files_failed: usize,
    pub records: usize,
}

/// Recursively scan `root` for files with `extension`, parse each according
/// to its detected format, and return every record in discovery order.
/// Order across files is not significant; within a file, records follow
/// input line order.
///
/// A missing root is not an error: it yields an empty collection and a
/// diagnostic. A file that cannot be read is skipped and the scan continues;
/// no partial records from a failed file are kept.
pub fn scan_root(root: &Path, extension: &str) -> (Vec<LogRecord>, ScanSummary) {
    let mut records = Vec::new();
    let mut summary = ScanSummary::default();

    if !root.exists() {
        warn!("Scan root does not exist: {}", root.display());
        return (records, summary);
    }

    info!("Scanning folder: {}", root.display());

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension() {
            Some(ext) if ext == extension => {}
            _ => continue,
        }

        summary.files_seen += 1;
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();

        match read_lossy(entry.path()) {
            Ok(content) => {
                let file_name = entry.file_name().to_string_lossy();
                let format = detect_format(&file_name);
                let parsed = parser_for(format).parse(&relative, &content);
                debug!("Parsed {} entries from {}", parsed.len(), relative);
                summary.records += parsed.len();
                records.extend(parsed);
            }
            Err(err) => {
                error!("{err}");
                summary.files_failed += 1;
            }
        }
    }

    info!(
        "Total entries parsed: {} from {} files",
        summary.records,
        summary.files_seen - summary.files_failed
    );
    (records, summary)
}

/// Read a file as text, replacing invalid UTF-8 rather than failing.
fn read_lossy(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
