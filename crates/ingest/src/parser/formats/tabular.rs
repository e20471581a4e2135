use crate::parser::model::{LogFormat, LogRecord};
use crate::parser::traits::FileParser;

const FIELDS_DIRECTIVE: &str = "#Fields:";

/// Parser for IIS/W3C extended logs.
///
/// An optional `#Fields:` directive names whitespace-delimited columns; data
/// rows are zipped against the current header set. Files without any
/// directive fall back to positional `field_N` names. Header state lives
/// only for the duration of one file parse.
pub struct TabularParser;

impl FileParser for TabularParser {
    fn parse(&self, file: &str, content: &str) -> Vec<LogRecord> {
        let mut headers: Vec<String> = Vec::new();
        let mut records = Vec::new();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix(FIELDS_DIRECTIVE) {
                // Each directive fully replaces the header set for all
                // subsequent rows. Hyphens are not legal in field names.
                headers = rest
                    .split_whitespace()
                    .map(|name| name.replace('-', "_"))
                    .collect();
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(record) = parse_row(file, &headers, line) {
                records.push(record);
            }
        }

        records
    }

    fn format(&self) -> LogFormat {
        LogFormat::Tabular
    }
}

fn parse_row(file: &str, headers: &[String], line: &str) -> Option<LogRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let mut record = LogRecord::new(file, LogFormat::Tabular);
    if headers.is_empty() {
        for (i, token) in tokens.iter().enumerate() {
            record.insert(format!("field_{i}"), *token);
        }
    } else {
        // Excess headers stay unset, excess tokens are dropped
        for (name, token) in headers.iter().zip(&tokens) {
            record.insert(name.clone(), *token);
        }
    }

    synthesize_timestamp(&mut record);
    Some(record)
}

/// Join `date` and `time` into a `timestamp` field. The positional fallback
/// assumes columns 0 and 1 are date and time when no header named them; that
/// is a known approximation, not a guarantee.
fn synthesize_timestamp(record: &mut LogRecord) {
    let joined = match (record.get("date"), record.get("time")) {
        (Some(date), Some(time)) => Some(format!("{date} {time}")),
        _ => match (record.get("field_0"), record.get("field_1")) {
            (Some(date), Some(time)) => Some(format!("{date} {time}")),
            _ => None,
        },
    };
    if let Some(timestamp) = joined {
        record.insert("timestamp", timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_fields_directive() {
        let parser = TabularParser;
        let content = "#Fields: date time s-ip cs-method\n2025-01-01 00:00:00 10.0.0.1 GET";

        let records = parser.parse("w3svc/ex.log", content);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.get("file"), Some("w3svc/ex.log"));
        assert_eq!(record.get("format"), Some("tabular"));
        assert_eq!(record.get("date"), Some("2025-01-01"));
        assert_eq!(record.get("time"), Some("00:00:00"));
        assert_eq!(record.get("s_ip"), Some("10.0.0.1"));
        assert_eq!(record.get("cs_method"), Some("GET"));
        assert_eq!(record.get("timestamp"), Some("2025-01-01 00:00:00"));
    }

    #[test]
    fn test_parse_without_directive_uses_positional_names() {
        let parser = TabularParser;
        let content = "2025-01-01 00:00:00 x y";

        let records = parser.parse("ex.log", content);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.get("field_0"), Some("2025-01-01"));
        assert_eq!(record.get("field_1"), Some("00:00:00"));
        assert_eq!(record.get("field_2"), Some("x"));
        assert_eq!(record.get("field_3"), Some("y"));
        assert_eq!(record.get("timestamp"), Some("2025-01-01 00:00:00"));
    }

    #[test]
    fn test_second_directive_replaces_headers() {
        let parser = TabularParser;
        let content = "#Fields: date time\n2025-01-01 00:00:00\n\
                       #Fields: c-ip sc-status\n10.0.0.1 200";

        let records = parser.parse("ex.log", content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("date"), Some("2025-01-01"));
        assert_eq!(records[1].get("c_ip"), Some("10.0.0.1"));
        assert_eq!(records[1].get("sc_status"), Some("200"));
        assert_eq!(records[1].get("date"), None);
    }

    #[test]
    fn test_excess_headers_left_unset() {
        let parser = TabularParser;
        let content = "#Fields: date time sc-status sc-bytes\n2025-01-01 00:00:00 200";

        let records = parser.parse("ex.log", content);
        let record = &records[0];
        assert_eq!(record.get("sc_status"), Some("200"));
        assert_eq!(record.get("sc_bytes"), None);
    }

    #[test]
    fn test_excess_tokens_dropped() {
        let parser = TabularParser;
        let content = "#Fields: date time\n2025-01-01 00:00:00 extra tokens here";

        let records = parser.parse("ex.log", content);
        let record = &records[0];
        assert_eq!(record.get("time"), Some("00:00:00"));
        assert_eq!(record.get("field_2"), None);
        assert!(record.fields().iter().all(|(_, v)| v != "extra"));
    }

    #[test]
    fn test_short_and_blank_lines_skipped() {
        let parser = TabularParser;
        let content = "#Fields: date time\n\n-\n2025-01-01 00:00:00";

        let records = parser.parse("ex.log", content);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_other_directives_ignored() {
        let parser = TabularParser;
        let content = "#Software: Microsoft Internet Information Services 10.0\n\
                       #Version: 1.0\n\
                       #Date: 2025-01-01 00:00:00\n\
                       #Fields: date time\n\
                       2025-01-01 00:00:01";

        let records = parser.parse("ex.log", content);
        // Directive lines are never data; the single data row has 2 tokens
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("date"), Some("2025-01-01"));
        assert_eq!(records[0].get("time"), Some("00:00:01"));
    }

    #[test]
    fn test_headered_row_without_date_gets_no_timestamp() {
        let parser = TabularParser;
        let content = "#Fields: c-ip sc-status\n10.0.0.1 200";

        let records = parser.parse("ex.log", content);
        assert_eq!(records[0].get("timestamp"), None);
    }

    #[test]
    fn test_header_named_timestamp_is_not_overwritten() {
        let parser = TabularParser;
        let content = "#Fields: timestamp date time\n1756000000 2025-01-01 00:00:00";

        let records = parser.parse("ex.log", content);
        assert_eq!(records[0].get("timestamp"), Some("1756000000"));
    }

    #[test]
    fn test_idempotent_across_invocations() {
        let parser = TabularParser;
        let content = "#Fields: date time s-ip\n2025-01-01 00:00:00 10.0.0.1\n2025-01-01 00:00:01 10.0.0.2";

        let first = parser.parse("ex.log", content);
        let second = parser.parse("ex.log", content);
        assert_eq!(first, second);
    }
}
