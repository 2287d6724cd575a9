//! Serde helpers for the `data` column of a daily report.
//!
//! The regional open-data files store the date as `YYYY-MM-DDTHH:MM:SS`
//! (always 18:00 local time). Older exports and hand-written records sometimes
//! use a bare `YYYY-MM-DD` or a full RFC 3339 timestamp, so all three forms are
//! accepted on read. Writes always use the canonical form.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(REPORT_DATE_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_report_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid report date: {raw}")))
}

/// Parse a stored report timestamp, returning `None` instead of failing.
pub fn parse_report_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
