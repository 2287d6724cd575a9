use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::core::persistence::report::daily_report_entity::DailyReportEntity;
use crate::domain::report::dto::daily_report_patch_request::DailyReportPatchRequest;
use crate::domain::report::error::ReportError;

/// Ordered, date-indexed snapshot of the daily report series.
///
/// Invariants held by every constructor and mutator:
/// - `reports` is sorted by calendar day, ascending;
/// - no two reports share a calendar day;
/// - `by_day[d] == i` iff `reports[i].day() == d`.
#[derive(Debug, Clone, Default)]
pub struct ReportSeries {
    reports: Vec<DailyReportEntity>,
    /// day → position in `reports`
    by_day: HashMap<NaiveDate, usize>,
}

impl ReportSeries {
    /// Build a series from raw stored rows. Rows are sorted by day; for
    /// duplicated days the first stored row wins.
    pub fn from_reports(mut reports: Vec<DailyReportEntity>) -> Self {
        reports.sort_by_key(DailyReportEntity::day);

        let mut kept: Vec<DailyReportEntity> = Vec::with_capacity(reports.len());
        for report in reports {
            if kept.last().is_some_and(|last| last.day() == report.day()) {
                warn!("Dropping duplicate report for {}", report.day());
                continue;
            }
            kept.push(report);
        }

        let mut series = Self {
            reports: kept,
            by_day: HashMap::new(),
        };
        series.reindex();
        series
    }

    fn reindex(&mut self) {
        self.by_day = self
            .reports
            .iter()
            .enumerate()
            .map(|(i, r)| (r.day(), i))
            .collect();
    }

    pub fn reports(&self) -> &[DailyReportEntity] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn position(&self, day: NaiveDate) -> Option<usize> {
        self.by_day.get(&day).copied()
    }

    pub fn get(&self, day: NaiveDate) -> Option<&DailyReportEntity> {
        self.position(day).map(|i| &self.reports[i])
    }

    /// Record with the greatest date.
    pub fn latest(&self) -> Option<&DailyReportEntity> {
        self.reports.last()
    }

    /// Insert at the sorted position.
    pub fn insert(&mut self, report: DailyReportEntity) -> Result<&DailyReportEntity, ReportError> {
        let day = report.day();
        if self.by_day.contains_key(&day) {
            return Err(ReportError::Conflict(day));
        }

        let idx = self.reports.partition_point(|r| r.day() < day);
        self.reports.insert(idx, report);
        self.reindex();

        Ok(&self.reports[idx])
    }

    pub fn update(
        &mut self,
        day: NaiveDate,
        patch: DailyReportPatchRequest,
    ) -> Result<&DailyReportEntity, ReportError> {
        let idx = self
            .position(day)
            .ok_or_else(|| ReportError::not_found_for_day(day))?;

        // Position and index are keyed on the day, which a patch never changes.
        self.reports[idx].apply_patch(patch);
        Ok(&self.reports[idx])
    }

    pub fn remove(&mut self, day: NaiveDate) -> Result<DailyReportEntity, ReportError> {
        let idx = self
            .position(day)
            .ok_or_else(|| ReportError::not_found_for_day(day))?;

        let removed = self.reports.remove(idx);
        self.reindex();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::report::daily_report_entity::fixtures::report;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn days(series: &ReportSeries) -> Vec<NaiveDate> {
        series.reports().iter().map(|r| r.day()).collect()
    }

    #[test]
    fn from_reports_sorts_and_drops_duplicate_days() {
        let series = ReportSeries::from_reports(vec![
            report("2020-03-12", 3, 0, 0, 1, 30),
            report("2020-03-10", 1, 0, 0, 1, 10),
            report("2020-03-11", 2, 0, 0, 1, 20),
            report("2020-03-10", 99, 0, 0, 99, 99),
        ]);

        assert_eq!(days(&series), vec![day("2020-03-10"), day("2020-03-11"), day("2020-03-12")]);
        assert_eq!(series.get(day("2020-03-10")).unwrap().total_cases, 1);
        assert_eq!(series.latest().unwrap().day(), day("2020-03-12"));
    }

    #[test]
    fn out_of_order_insert_keeps_series_sorted() {
        let mut series = ReportSeries::from_reports(vec![
            report("2020-03-10", 1, 0, 0, 1, 10),
            report("2020-03-12", 3, 0, 0, 1, 30),
        ]);

        series.insert(report("2020-03-11", 2, 0, 0, 1, 20)).unwrap();
        series.insert(report("2020-03-09", 0, 0, 0, 0, 5)).unwrap();

        assert_eq!(
            days(&series),
            vec![day("2020-03-09"), day("2020-03-10"), day("2020-03-11"), day("2020-03-12")]
        );
        assert_eq!(series.position(day("2020-03-11")), Some(2));
        assert_eq!(series.latest().unwrap().day(), day("2020-03-12"));
    }

    #[test]
    fn duplicate_insert_is_a_conflict() {
        let mut series = ReportSeries::from_reports(vec![report("2020-03-10", 1, 0, 0, 1, 10)]);

        let err = series.insert(report("2020-03-10", 5, 0, 0, 5, 50)).unwrap_err();
        assert!(matches!(err, ReportError::Conflict(d) if d == day("2020-03-10")));
        assert_eq!(series.len(), 1);
        assert_eq!(series.get(day("2020-03-10")).unwrap().total_cases, 1);
    }

    #[test]
    fn removing_absent_day_leaves_series_intact() {
        let mut series = ReportSeries::from_reports(vec![
            report("2020-03-10", 1, 0, 0, 1, 10),
            report("2020-03-11", 2, 0, 0, 1, 20),
        ]);
        let before = days(&series);

        let err = series.remove(day("2020-04-01")).unwrap_err();
        assert!(matches!(err, ReportError::NotFound(_)));
        assert_eq!(days(&series), before);
    }

    #[test]
    fn remove_reindexes_following_days() {
        let mut series = ReportSeries::from_reports(vec![
            report("2020-03-10", 1, 0, 0, 1, 10),
            report("2020-03-11", 2, 0, 0, 1, 20),
            report("2020-03-12", 3, 0, 0, 1, 30),
        ]);

        let removed = series.remove(day("2020-03-10")).unwrap();
        assert_eq!(removed.total_cases, 1);
        assert_eq!(series.position(day("2020-03-12")), Some(1));
        assert!(series.get(day("2020-03-10")).is_none());
    }

    #[test]
    fn update_of_absent_day_is_not_found() {
        let mut series = ReportSeries::default();
        let err = series
            .update(day("2020-03-10"), DailyReportPatchRequest::default())
            .unwrap_err();
        assert!(matches!(err, ReportError::NotFound(_)));
    }
}
