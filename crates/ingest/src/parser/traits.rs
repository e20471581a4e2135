pub use super::model::{LogFormat, LogRecord};

/// A per-format file parser.
///
/// Implementations receive a scan-relative path and the full decoded file
/// content, and emit one record per parseable line, in input line order.
/// Lines that do not match the format are dropped silently: operators feed
/// these parsers noisy real-world logs and rely on the tolerant behavior.
pub trait FileParser: Send + Sync {
    /// Parse full file content into records.
    fn parse(&self, file: &str, content: &str) -> Vec<LogRecord>;
    fn format(&self) -> LogFormat;
}
