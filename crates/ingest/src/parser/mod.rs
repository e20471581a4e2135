/// Log parsing and normalization module
///
/// This module converts raw log file text into unified, string-keyed
/// records so operators can browse mixed-format logs without per-format
/// tooling.
///
/// # Architecture
///
/// - `model.rs`: Record and format types
/// - `traits.rs`: Core trait for per-format parsers
/// - `detect.rs`: Filename-based format classification
/// - `formats/`: Individual format parser implementations
///
/// # Parsing Guarantees
///
/// All parsers are lossy by contract:
/// - Malformed lines are dropped, never reported
/// - A failed sub-field extraction leaves the field empty, never errors
/// - Field names are written once per record (first write wins)

pub mod detect;
pub mod formats;
pub mod model;
pub mod traits;
mod serde_utils;

// Re-export commonly used types
pub use detect::{detect_format, parser_for};
pub use model::{LogFormat, LogRecord};
pub use traits::FileParser;

/// Filename substring that marks the IIS/W3C extended (tabular) format.
pub const TABULAR_MARKER: &str = "_u_ex";
