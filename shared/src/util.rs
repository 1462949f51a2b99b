use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a backend date or timestamp into Unix milliseconds.
///
/// Accepts RFC 3339 (`2024-03-01T08:00:00Z`), naive ISO date-times with or
/// without fractional seconds (`2024-03-01T08:00:00.123`) and plain dates
/// (`2024-03-01`, read as midnight UTC).
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Like [`parse_timestamp_millis`], but missing or unparseable dates
/// count as the Unix epoch so they sort as the oldest.
pub fn timestamp_or_epoch(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp_millis).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse_timestamp_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp_millis("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_timestamp_millis("1970-01-01T00:00:01.500"), Some(1_500));
        assert_eq!(parse_timestamp_millis("1970-01-01 00:00:02"), Some(2_000));
        assert_eq!(parse_timestamp_millis("yesterday"), None);
    }

    #[test]
    fn test_missing_is_epoch() {
        assert_eq!(timestamp_or_epoch(None), 0);
        assert_eq!(timestamp_or_epoch(Some("")), 0);
        assert_eq!(timestamp_or_epoch(Some("garbage")), 0);
    }
}
