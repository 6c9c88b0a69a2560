//! Time utilities

use chrono::{DateTime, Datelike, Duration, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Cutoff datetime a number of days in the past
pub fn days_ago(days: i64) -> DateTime<Utc> {
    now_utc() - Duration::days(days)
}

/// Cutoff datetime a number of calendar months in the past
pub fn months_ago(months: i32) -> DateTime<Utc> {
    let now = now_utc();
    let total = now.year() * 12 + now.month0() as i32 - months;
    let (year, month0) = (total.div_euclid(12), total.rem_euclid(12));

    // Clamp to a day every month has; the cutoff only bounds a range filter
    now.with_day(1)
        .and_then(|d| d.with_year(year))
        .and_then(|d| d.with_month0(month0 as u32))
        .unwrap_or(now)
}

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_ago() {
        let cutoff = days_ago(30);
        assert!(cutoff < now_utc());
        assert!(now_utc() - cutoff >= Duration::days(30));
        assert!(now_utc() - cutoff < Duration::days(31));
    }

    #[test]
    fn test_months_ago_crosses_year_boundary() {
        let cutoff = months_ago(6);
        assert!(cutoff < now_utc());
        assert_eq!(cutoff.day(), 1);
        // Never further back than ~7 months
        assert!(now_utc() - cutoff < Duration::days(7 * 31));
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }
}
