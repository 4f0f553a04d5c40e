use super::*;

const MINUTE_MS: f64 = 60.0 * 1000.0;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(relative_time_from_ms(0.0), "just now");
    assert_eq!(relative_time_from_ms(30_000.0), "just now");
    assert_eq!(relative_time_from_ms(-5_000.0), "just now");
}

#[test]
fn minutes_round_from_seconds() {
    assert_eq!(relative_time_from_ms(MINUTE_MS), "1 minute ago");
    assert_eq!(relative_time_from_ms(90.0 * 1000.0), "2 minutes ago");
    assert_eq!(relative_time_from_ms(59.0 * MINUTE_MS), "59 minutes ago");
}

#[test]
fn hours_days_weeks_roll_over() {
    assert_eq!(relative_time_from_ms(HOUR_MS), "1 hour ago");
    assert_eq!(relative_time_from_ms(5.0 * HOUR_MS), "5 hours ago");
    assert_eq!(relative_time_from_ms(DAY_MS), "1 day ago");
    assert_eq!(relative_time_from_ms(36.0 * HOUR_MS), "2 days ago");
    assert_eq!(relative_time_from_ms(7.0 * DAY_MS), "1 week ago");
}

#[test]
fn months_and_years_use_coarse_buckets() {
    assert_eq!(relative_time_from_ms(30.0 * DAY_MS), "1 month ago");
    assert_eq!(relative_time_from_ms(90.0 * DAY_MS), "3 months ago");
    assert_eq!(relative_time_from_ms(365.0 * DAY_MS), "1 year ago");
    assert_eq!(relative_time_from_ms(800.0 * DAY_MS), "2 years ago");
}
