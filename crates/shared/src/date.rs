use time::{OffsetDateTime, macros::format_description};

/// Current time as a unix timestamp (seconds).
pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Formats a unix timestamp as a long US date, e.g. "October 17, 2026".
///
/// Out-of-range timestamps are rendered as the raw number.
pub fn format_date(timestamp: i64) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|date| date.format(format).ok())
        .unwrap_or_else(|| timestamp.to_string())
}
