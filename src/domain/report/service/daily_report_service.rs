use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;
use validator::Validate;

use crate::core::persistence::report::daily_report_entity::DailyReportEntity;
use crate::core::persistence::report::report_date_format::parse_report_timestamp;
use crate::core::state::report::report_store::ReportStore;
use crate::domain::report::dto::daily_report_patch_request::{
    validate_flat_columns, DailyReportPatchRequest,
};
use crate::domain::report::error::ReportError;
use crate::domain::report::model::date_range::DateRange;
use crate::domain::report::service::date_range_filter::filter_by_range;

/// CRUD over the daily report series.
pub struct DailyReportService {
    store: Arc<ReportStore>,
}

impl DailyReportService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    pub async fn list_reports(&self) -> Result<Vec<DailyReportEntity>> {
        Ok(self.store.snapshot().await.reports().to_vec())
    }

    pub async fn get_latest_report(&self) -> Result<DailyReportEntity> {
        let series = self.store.snapshot().await;
        series
            .latest()
            .cloned()
            .ok_or_else(|| ReportError::no_reports().into())
    }

    pub async fn get_report(&self, day: NaiveDate) -> Result<DailyReportEntity> {
        let series = self.store.snapshot().await;
        series
            .get(day)
            .cloned()
            .ok_or_else(|| ReportError::not_found_for_day(day).into())
    }

    pub async fn get_reports_in_range(&self, range: DateRange) -> Result<Vec<DailyReportEntity>> {
        let series = self.store.snapshot().await;
        let reports = filter_by_range(&series, &range);
        if reports.is_empty() {
            return Err(ReportError::nothing_in_range().into());
        }
        Ok(reports.to_vec())
    }

    pub async fn create_report(&self, report: DailyReportEntity) -> Result<DailyReportEntity> {
        validate_flat_columns(&report.extra)
            .map_err(|e| ReportError::InvalidReport(e.to_string()))?;

        let day = report.day();
        let created = self
            .store
            .mutate(move |series| series.insert(report).cloned())
            .await?;

        info!("Created daily report for {}", day);
        Ok(created)
    }

    pub async fn update_report(
        &self,
        day: NaiveDate,
        patch: DailyReportPatchRequest,
    ) -> Result<DailyReportEntity> {
        patch
            .validate()
            .map_err(|e| ReportError::InvalidPatch(e.to_string()))?;

        let requested = match patch.date.as_deref() {
            Some(raw) => Some(
                parse_report_timestamp(raw)
                    .ok_or_else(|| ReportError::InvalidPatch(format!("invalid date '{raw}'")))?,
            ),
            None => None,
        };

        let updated = self
            .store
            .mutate(move |series| {
                if let (Some(ts), Some(current)) = (requested, series.get(day)) {
                    if ts != current.date {
                        return Err(ReportError::InvalidPatch(format!(
                            "the report timestamp cannot be changed (stored {})",
                            current.date
                        )));
                    }
                }
                series.update(day, patch).cloned()
            })
            .await?;

        info!("Updated daily report for {}", day);
        Ok(updated)
    }

    pub async fn delete_report(&self, day: NaiveDate) -> Result<DailyReportEntity> {
        let removed = self.store.mutate(move |series| series.remove(day)).await?;

        info!("Deleted daily report for {}", day);
        Ok(removed)
    }
}
