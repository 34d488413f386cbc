//! Serde helpers for the service's loosely typed fields.
//!
//! The backend writes `""` for absent optional strings and emits naive
//! ISO-8601 timestamps (`2026-01-31T10:00:00`, sometimes with microseconds).

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Timestamp,
};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Parse a service timestamp into civil time.
///
/// Naive values are taken as-is and a bare date means midnight. Values
/// carrying `Z` or a numeric offset (`+05:30`, `-03:00`) are converted to
/// the instant they denote and normalised to UTC.
///
/// # Examples
///
/// ```rust
/// use valetdesk_core::models::parse_service_time;
///
/// let naive = parse_service_time("2026-01-31T10:00:00").unwrap();
/// let zulu = parse_service_time("2026-01-31T10:00:00Z").unwrap();
/// let ist = parse_service_time("2026-01-31T15:30:00+05:30").unwrap();
/// assert_eq!(naive, zulu);
/// assert_eq!(naive, ist);
/// ```
pub fn parse_service_time(raw: &str) -> Result<DateTime, jiff::Error> {
    let raw = raw.trim();
    if has_offset(raw) {
        return raw
            .parse::<Timestamp>()
            .map(|ts| ts.to_zoned(TimeZone::UTC).datetime());
    }
    match raw.parse::<DateTime>() {
        Ok(datetime) => Ok(datetime),
        Err(err) => raw
            .parse::<Date>()
            .map(|date| date.to_datetime(Time::midnight()))
            .map_err(|_| err),
    }
}

/// Whether the time part ends in `Z` or carries a `+`/`-` offset.
fn has_offset(raw: &str) -> bool {
    let Some((_, time)) = raw.split_once(['T', 't', ' ']) else {
        return false;
    };
    time.ends_with(['Z', 'z']) || time.contains(['+', '-'])
}

/// Required timestamp field.
pub(crate) mod service_time {
    use super::*;

    pub fn serialize<S: Serializer>(value: &DateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_service_time(&raw).map_err(de::Error::custom)
    }
}

/// Optional timestamp field; `null`, missing and `""` all mean absent.
pub(crate) mod optional_service_time {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(datetime) => serializer.collect_str(datetime),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_service_time(&raw)
                .map(Some)
                .map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Optional string field; `null`, missing and `""` all mean absent.
pub(crate) fn empty_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
