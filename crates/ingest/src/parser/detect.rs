use super::formats::{TabularParser, TraceParser};
use super::model::LogFormat;
use super::traits::FileParser;

/// Classify a file by name alone.
///
/// Filenames carrying the `_u_ex` marker (IIS extended log naming) are
/// tabular; everything else is trace. Total function: every name maps to
/// exactly one format, there is no unknown case and no content sniffing.
pub fn detect_format(file_name: &str) -> LogFormat {
    if file_name.contains(super::TABULAR_MARKER) {
        LogFormat::Tabular
    } else {
        LogFormat::Trace
    }
}

/// The parser instance for a detected format.
pub fn parser_for(format: LogFormat) -> &'static dyn FileParser {
    match format {
        LogFormat::Trace => &TraceParser,
        LogFormat::Tabular => &TabularParser,
    }
}
