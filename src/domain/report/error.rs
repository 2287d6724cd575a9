use chrono::NaiveDate;
use thiserror::Error;

/// Domain outcomes of report queries and mutations.
///
/// Services return these wrapped in `anyhow::Error`; the HTTP layer downcasts
/// them back to pick a status code.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    NotFound(String),

    #[error("A report for {0} already exists")]
    Conflict(NaiveDate),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid report update: {0}")]
    InvalidPatch(String),

    #[error("Invalid report: {0}")]
    InvalidReport(String),

    #[error("Failed to persist report series: {0}")]
    Persistence(String),
}

impl ReportError {
    pub fn not_found_for_day(day: NaiveDate) -> Self {
        ReportError::NotFound(format!("No report available for {day}"))
    }

    pub fn no_reports() -> Self {
        ReportError::NotFound("No report available".into())
    }

    pub fn nothing_in_range() -> Self {
        ReportError::NotFound("No report available for the requested range".into())
    }
}
