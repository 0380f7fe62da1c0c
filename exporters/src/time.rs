//! Time utility functions

use chrono::{DateTime, SecondsFormat, Utc};

/// Convert nanoseconds since Unix epoch to DateTime<Utc>, truncated to
/// millisecond precision.
pub fn nanos_to_datetime(nanos: u64) -> DateTime<Utc> {
    let millis = (nanos / 1_000_000) as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_else(|| {
        tracing::warn!(nanos, "Invalid timestamp, using epoch");
        DateTime::UNIX_EPOCH
    })
}

/// Convert nanoseconds since Unix epoch to ISO 8601 UTC string
/// (millisecond precision)
pub fn nanos_to_iso(nanos: u64) -> String {
    nanos_to_datetime(nanos).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_nanos_to_datetime_epoch() {
        let dt = nanos_to_datetime(0);
        assert_eq!(dt.year(), 1970);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
    }

    #[test]
    fn test_nanos_to_iso_epoch() {
        assert_eq!(nanos_to_iso(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_nanos_to_iso_known_timestamp() {
        // 2024-01-01 00:00:00 UTC
        let nanos = 1704067200_u64 * 1_000_000_000;
        assert_eq!(nanos_to_iso(nanos), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_nanos_to_iso_sub_millisecond_truncated() {
        // 1 second + 123.456789 milliseconds
        let nanos = 1_000_000_000 + 123_456_789;
        assert_eq!(nanos_to_iso(nanos), "1970-01-01T00:00:01.123Z");
    }

    #[test]
    fn test_nanos_to_iso_uses_utc_suffix() {
        assert!(nanos_to_iso(0).ends_with('Z'));
    }

    #[test]
    fn test_nanos_to_iso_monotonic() {
        let a = nanos_to_iso(1_000_000_000);
        let b = nanos_to_iso(2_000_000_000);
        let c = nanos_to_iso(2_000_000_000);
        assert!(a < b);
        assert_eq!(b, c);
    }
}
