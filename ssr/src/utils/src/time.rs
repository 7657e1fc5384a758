use chrono::{DateTime, Utc};

/// Compact age of a timestamp: "just now", "5m", "3h", "2d", then a date.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 60 * 60 => format!("{}m", s / 60),
        s if s < 60 * 60 * 24 => format!("{}h", s / 3600),
        s if s < 60 * 60 * 24 * 7 => format!("{}d", s / 86_400),
        _ => then.format("%b %-d, %Y").to_string(),
    }
}

pub fn relative_to_now(then: Option<DateTime<Utc>>) -> String {
    then.map(|t| relative_time(t, Utc::now())).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(5), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h");
        assert_eq!(relative_time(now - Duration::days(2), now), "2d");
        assert_eq!(relative_time(now - Duration::days(30), now), "May 11, 2024");
    }

    #[test]
    fn future_timestamps_read_as_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now + Duration::minutes(3), now), "just now");
    }
}
