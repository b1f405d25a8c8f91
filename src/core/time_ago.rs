use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000; // 30 days
const YEAR: i64 = 31_536_000; // 365 days

/// Elapsed time between a millisecond timestamp and `now`, e.g. "3 days ago"
///
/// Each bucket counts whole units of its size; anything under a minute,
/// including timestamps in the future, reads "less than a minute ago".
pub fn time_ago_at(timestamp_ms: i64, now: DateTime<Utc>) -> String {
    let elapsed = now.timestamp_millis().saturating_sub(timestamp_ms).div_euclid(1000);

    let (count, unit) = match elapsed {
        e if e < MINUTE => return "less than a minute ago".to_string(),
        e if e < HOUR => (e / MINUTE, "minute"),
        e if e < DAY => (e / HOUR, "hour"),
        e if e < MONTH => (e / DAY, "day"),
        e if e < YEAR => (e / MONTH, "month"),
        e => (e / YEAR, "year"),
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// [`time_ago_at`] against the current time
pub fn time_ago(timestamp_ms: i64) -> String {
    time_ago_at(timestamp_ms, Utc::now())
}

/// `YYYY-MM-DD HH:MM:SS` in UTC, or an empty string when out of range
pub fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(now: DateTime<Utc>, elapsed: Duration) -> String {
        time_ago_at((now - elapsed).timestamp_millis(), now)
    }

    #[test]
    fn test_buckets() {
        let now = Utc::now();

        assert_eq!(ago(now, Duration::seconds(59)), "less than a minute ago");
        assert_eq!(ago(now, Duration::seconds(90)), "1 minute ago");
        assert_eq!(ago(now, Duration::minutes(45)), "45 minutes ago");
        assert_eq!(ago(now, Duration::hours(1)), "1 hour ago");
        assert_eq!(ago(now, Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(now, Duration::days(3)), "3 days ago");
        assert_eq!(ago(now, Duration::days(29)), "29 days ago");
        assert_eq!(ago(now, Duration::days(30)), "1 month ago");
        assert_eq!(ago(now, Duration::days(200)), "6 months ago");
        assert_eq!(ago(now, Duration::days(365)), "1 year ago");
        assert_eq!(ago(now, Duration::days(800)), "2 years ago");
    }

    #[test]
    fn test_future_timestamp() {
        let now = Utc::now();
        assert_eq!(ago(now, Duration::seconds(-120)), "less than a minute ago");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let now = Utc::now();
        assert!(time_ago_at(i64::MIN, now).ends_with("years ago"));
        assert_eq!(time_ago_at(i64::MAX, now), "less than a minute ago");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13:20");
    }
}
