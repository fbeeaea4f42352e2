use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use scalekit_protocol::{FormattedTime, TimeFormatOptions};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("timestamp {0}ms is outside the supported date range")]
    OutOfRange(i64),
}

/// Format a timestamp in the local system time zone.
///
/// Produces `YYYY-MM-DD HH:MM:SS` with the default separators.
pub fn format_timestamp(options: &TimeFormatOptions) -> Result<FormattedTime, TimeFormatError> {
    format_timestamp_in(options, &Local)
}

/// Format a timestamp in an explicit time zone.
///
/// Month, day, hour, minute and second are zero-padded to two digits. The
/// year is written as-is.
pub fn format_timestamp_in<Tz: TimeZone>(
    options: &TimeFormatOptions,
    tz: &Tz,
) -> Result<FormattedTime, TimeFormatError> {
    let instant = resolve_instant(options.timestamp_millis)?.with_timezone(tz);
    let date = options.date_separator.as_str();
    let time = options.time_separator.as_str();

    let formatted = format!(
        "{year}{date}{month:02}{date}{day:02}{sep}{hour:02}{time}{minute:02}{time}{second:02}",
        year = instant.year(),
        month = instant.month(),
        day = instant.day(),
        sep = options.date_time_separator,
        hour = instant.hour(),
        minute = instant.minute(),
        second = instant.second(),
    );
    Ok(FormattedTime { formatted })
}

/// Zero and `None` both mean "now".
fn resolve_instant(timestamp_millis: Option<i64>) -> Result<DateTime<Utc>, TimeFormatError> {
    match timestamp_millis {
        Some(ms) if ms != 0 => {
            DateTime::from_timestamp_millis(ms).ok_or(TimeFormatError::OutOfRange(ms))
        }
        _ => Ok(Utc::now()),
    }
}
