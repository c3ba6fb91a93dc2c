use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a required RFC 3339 timestamp from a request body field.
pub fn parse_rfc3339_field(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::BadRequest(format!("invalid {} format, use RFC3339", field)))
}

/// Resolves the `start`/`end` list bounds. Either bound may be a full RFC 3339
/// timestamp or a bare `YYYY-MM-DD` date. A bare `end` date is widened to the
/// last second of that day. Returns `None` unless both bounds are present.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };

    let start = parse_bound(start, false)
        .ok_or_else(|| Error::BadRequest("invalid start time format".to_string()))?;
    let end = parse_bound(end, true)
        .ok_or_else(|| Error::BadRequest("invalid end time format".to_string()))?;

    Ok(Some((start, end)))
}

fn parse_bound(raw: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    if end_of_day {
        Some(midnight + Duration::hours(24) - Duration::seconds(1))
    } else {
        Some(midnight)
    }
}
