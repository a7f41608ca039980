use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Get the current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the current local wall clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a duration as hours, minutes and seconds.
/// Negative durations are clamped to zero.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
