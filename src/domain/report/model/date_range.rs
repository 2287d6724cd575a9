use chrono::{Days, NaiveDate};

use crate::domain::report::error::ReportError;

pub const STRICT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar-date range.
///
/// `start > end` is representable on purpose: the engine treats it as an
/// empty range. Use [`DateRange::validated`] at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn validated(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self::new(start, end))
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Same range with the start moved `days` calendar days earlier.
    /// Saturates at the earliest representable date.
    pub fn extended_back(&self, days: u64) -> Self {
        let start = self
            .start
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting anything chrono would otherwise
/// tolerate (single-digit months, signs, surrounding whitespace).
pub fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, STRICT_DATE_FORMAT).ok()
}
