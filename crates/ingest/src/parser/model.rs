use serde::{Deserialize, Serialize};

/// The two log formats this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Free-text trace logs with an inline timestamp, level, and message
    Trace,
    /// IIS/W3C extended logs with `#Fields:`-named columns
    Tabular,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Trace => "trace",
            LogFormat::Tabular => "tabular",
        }
    }
}

/// A unified log record: an ordered field-name → value mapping.
///
/// Every record carries `file` (source path, relative to the scan root) and
/// `format`. All other fields vary by format and by file; consumers must
/// treat them as optional. Serializes as a single flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    fields: Vec<(String, String)>,
}

impl LogRecord {
    pub fn new(file: &str, format: LogFormat) -> Self {
        Self {
            fields: vec![
                ("file".to_string(), file.to_string()),
                ("format".to_string(), format.as_str().to_string()),
            ],
        }
    }

    pub(crate) fn from_fields(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Add a field. First write wins: an existing name is never overwritten,
    /// later construction steps only fill gaps.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if self.get(&name).is_none() {
            self.fields.push((name, value.into()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Source file path, relative to the scan root.
    pub fn file(&self) -> &str {
        self.get("file").unwrap_or_default()
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
