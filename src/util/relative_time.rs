//! Relative timestamp formatting ("2 hours ago") for post metadata.
//!
//! Each unit is rounded from the previous rounded value, so 90 seconds
//! reads "2 minutes ago" and 36 hours reads "2 days ago".

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

/// Current wall-clock time in milliseconds since the epoch. Zero outside a
/// browser, which keeps native tests deterministic.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Format the distance between two instants, given as a millisecond delta
/// (`now - then`). Deltas under a minute, including negative ones, read
/// "just now".
#[must_use]
pub fn relative_time_from_ms(diff_ms: f64) -> String {
    let diff_sec = (diff_ms / 1000.0).round();
    let diff_min = (diff_sec / 60.0).round();
    let diff_hour = (diff_min / 60.0).round();
    let diff_day = (diff_hour / 24.0).round();
    let diff_week = (diff_day / 7.0).round();
    let diff_month = (diff_day / 30.0).round();
    let diff_year = (diff_day / 365.0).round();

    if diff_sec < 60.0 {
        "just now".to_owned()
    } else if diff_min < 60.0 {
        counted(diff_min, "minute")
    } else if diff_hour < 24.0 {
        counted(diff_hour, "hour")
    } else if diff_day < 7.0 {
        counted(diff_day, "day")
    } else if diff_week < 4.0 {
        counted(diff_week, "week")
    } else if diff_month < 12.0 {
        counted(diff_month, "month")
    } else {
        counted(diff_year, "year")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn counted(count: f64, unit: &str) -> String {
    let count = count as i64;
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
