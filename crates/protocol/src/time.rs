use serde::{Deserialize, Serialize};

/// Separators and source instant for a formatted timestamp.
///
/// A missing or zero `timestamp_millis` means "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeFormatOptions {
    /// Between year, month and day.
    pub date_separator: String,
    /// Between the date and the time.
    pub date_time_separator: String,
    /// Between hours, minutes and seconds.
    pub time_separator: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_millis: Option<i64>,
}

impl Default for TimeFormatOptions {
    fn default() -> Self {
        Self {
            date_separator: "-".to_string(),
            date_time_separator: " ".to_string(),
            time_separator: ":".to_string(),
            timestamp_millis: None,
        }
    }
}

impl TimeFormatOptions {
    pub fn at_millis(timestamp_millis: i64) -> Self {
        Self {
            timestamp_millis: Some(timestamp_millis),
            ..Self::default()
        }
    }

    pub fn with_date_separator(mut self, separator: impl Into<String>) -> Self {
        self.date_separator = separator.into();
        self
    }

    pub fn with_date_time_separator(mut self, separator: impl Into<String>) -> Self {
        self.date_time_separator = separator.into();
        self
    }

    pub fn with_time_separator(mut self, separator: impl Into<String>) -> Self {
        self.time_separator = separator.into();
        self
    }
}

/// Result of formatting a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTime {
    pub formatted: String,
}

impl std::fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted)
    }
}
