//! Store — the in-memory record collection and derived statistics.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::parser::LogRecord;

/// Read-only holder of every record produced by one full scan.
///
/// Populated once at startup and never mutated afterwards, so it is safe to
/// share across concurrent readers without locking.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<LogRecord>,
}

/// Summary statistics over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total_entries: usize,
    pub total_files: usize,
    /// Distinct source files, sorted ascending.
    pub files: Vec<String>,
}

impl RecordStore {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    /// The full collection, unfiltered.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entry count plus the distinct set of source files, derived on demand.
    pub fn stats(&self) -> StoreStats {
        let files: BTreeSet<&str> = self.records.iter().map(|r| r.file()).collect();
        StoreStats {
            total_entries: self.records.len(),
            total_files: files.len(),
            files: files.into_iter().map(str::to_string).collect(),
        }
    }
}
