use chrono::Days;

use crate::core::persistence::report::daily_report_entity::DailyReportEntity;
use crate::core::state::report::report_series::ReportSeries;

/// Record for the calendar day before `report`, looked up in the full series.
///
/// Returns `None` on the first day of the series or when the previous day is
/// missing (a gap). Lookup goes through the series' day index.
pub fn find_prior_day<'a>(series: &'a ReportSeries, report: &DailyReportEntity) -> Option<&'a DailyReportEntity> {
    let prior = report.day().checked_sub_days(Days::new(1))?;
    series.get(prior)
}

/// Day-over-day change of a cumulative column.
///
/// With no prior day, the whole cumulative value counts as new.
pub fn cumulative_delta<F>(series: &ReportSeries, report: &DailyReportEntity, field: F) -> i64
where
    F: Fn(&DailyReportEntity) -> u64,
{
    let current = field(report) as i64;
    match find_prior_day(series, report) {
        Some(prior) => current - field(prior) as i64,
        None => current,
    }
}
