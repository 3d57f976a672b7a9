//! Time display formatting
//!
//! Provides consistent duration and publication date display formatting
//! across the Podr modules.

use chrono::{DateTime, Utc};

/// Format whole seconds as `HH:MM:SS`.
///
/// Each component is zero-padded to two digits. The hours component is
/// unbounded: durations past 99 hours render with as many digits as the
/// hour count needs rather than wrapping.
///
/// # Examples
///
/// ```
/// use podr_common::time::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(61), "00:01:01");
/// assert_eq!(format_duration(3661), "01:01:01");
/// assert_eq!(format_duration(450_000), "125:00:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a publication timestamp as a short display date (e.g. `22 Jan 21`)
pub fn format_published_at(published_at: DateTime<Utc>) -> String {
    published_at.format("%-d %b %y").to_string()
}
