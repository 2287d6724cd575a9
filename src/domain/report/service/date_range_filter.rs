use crate::core::persistence::report::daily_report_entity::DailyReportEntity;
use crate::core::state::report::report_series::ReportSeries;
use crate::domain::report::model::date_range::DateRange;

/// Contiguous run of reports whose calendar day lies in `range`.
///
/// The series is kept sorted by day, so the bounds are found by binary search
/// and the result borrows directly from the snapshot. Reversed ranges and
/// empty series yield an empty slice.
pub fn filter_by_range<'a>(series: &'a ReportSeries, range: &DateRange) -> &'a [DailyReportEntity] {
    if range.is_empty() {
        return &[];
    }

    let reports = series.reports();
    let lo = reports.partition_point(|r| r.day() < range.start);
    let hi = reports.partition_point(|r| r.day() <= range.end);

    &reports[lo..hi.max(lo)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::report::daily_report_entity::fixtures::report;
    use crate::domain::report::model::date_range::parse_strict_date;
    use chrono::NaiveDate;

    fn d(raw: &str) -> NaiveDate {
        parse_strict_date(raw).unwrap()
    }

    fn series() -> ReportSeries {
        ReportSeries::from_reports(vec![
            report("2020-03-10", 1, 0, 0, 1, 10),
            report("2020-03-11", 2, 0, 0, 1, 20),
            report("2020-03-13", 3, 0, 0, 1, 30),
            report("2020-03-14", 4, 0, 0, 1, 40),
        ])
    }

    fn days(reports: &[DailyReportEntity]) -> Vec<NaiveDate> {
        reports.iter().map(|r| r.day()).collect()
    }

    #[test]
    fn bounds_are_inclusive_and_ignore_time_of_day() {
        let series = series();
        let hit = filter_by_range(&series, &DateRange::new(d("2020-03-11"), d("2020-03-13")));
        assert_eq!(days(hit), vec![d("2020-03-11"), d("2020-03-13")]);
    }

    #[test]
    fn range_inside_a_gap_is_empty() {
        let series = series();
        assert!(filter_by_range(&series, &DateRange::single(d("2020-03-12"))).is_empty());
    }

    #[test]
    fn reversed_range_is_empty() {
        let series = series();
        let range = DateRange::new(d("2020-03-14"), d("2020-03-10"));
        assert!(filter_by_range(&series, &range).is_empty());
    }

    #[test]
    fn empty_series_is_empty() {
        let series = ReportSeries::default();
        let range = DateRange::new(d("2020-01-01"), d("2020-12-31"));
        assert!(filter_by_range(&series, &range).is_empty());
    }

    #[test]
    fn range_covering_everything_returns_whole_series() {
        let series = series();
        let range = DateRange::new(d("2019-01-01"), d("2021-01-01"));
        assert_eq!(filter_by_range(&series, &range).len(), series.len());
    }
}
