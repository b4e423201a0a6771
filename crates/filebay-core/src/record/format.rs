//! Display formatting for sizes and dates

use chrono::{DateTime, Local, Utc};

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format a byte count for display.
///
/// Below 1024 the raw value is printed with a `B` suffix; above it the value
/// is divided by 1024 until it fits, capped at TB, with one decimal place.
/// Takes `f64` so average sizes can be formatted too.
pub fn human_size(bytes: f64) -> String {
    if bytes < 1024.0 {
        return format!("{} B", bytes);
    }
    let mut value = bytes;
    let mut unit = 0;
    value /= 1024.0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a record timestamp as a local `dd.mm.yyyy` date
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m.%Y").to_string()
}
