use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::model::{LogFormat, LogRecord};
use crate::parser::traits::FileParser;

/// Line shape: `2025-12-18 00:00:03.5805 TRACE Start function Foo.Bar`
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}\.\d+)\s+(\w+)\s+(.+)$")
        .expect("trace line pattern")
});

static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+([\w.]+)").expect("function pattern"));

static SYSTEM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"systemName:\s*([\w.-]+)").expect("systemName pattern"));

/// Parser for free-text trace logs.
///
/// Each line is `timestamp level message`; the message may carry embedded
/// structured hints (function name, system name, parameter marker) which are
/// extracted independently of one another. Timestamps stay raw strings, no
/// calendar or timezone validation.
pub struct TraceParser;

impl FileParser for TraceParser {
    fn parse(&self, file: &str, content: &str) -> Vec<LogRecord> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| parse_line(file, line))
            .collect()
    }

    fn format(&self) -> LogFormat {
        LogFormat::Trace
    }
}

fn parse_line(file: &str, line: &str) -> Option<LogRecord> {
    let caps = LINE_RE.captures(line)?;
    let message = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

    let mut record = LogRecord::new(file, LogFormat::Trace);
    record.insert("timestamp", &caps[1]);
    record.insert("level", &caps[2]);
    record.insert("message", message);
    record.insert("function", extract_function(message));
    record.insert("system_name", extract_system_name(message));
    record.insert(
        "has_params",
        if message.contains("Parameters:") { "Yes" } else { "" },
    );
    Some(record)
}

/// Keyword gate and extraction pattern are both case-sensitive: a message
/// that passes the gate on `Function` alone extracts nothing.
fn extract_function(message: &str) -> String {
    if !message.contains("Start function") && !message.contains("Function") {
        return String::new();
    }
    FUNCTION_RE
        .captures(message)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

fn extract_system_name(message: &str) -> String {
    if !message.contains("systemName:") {
        return String::new();
    }
    SYSTEM_NAME_RE
        .captures(message)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}
