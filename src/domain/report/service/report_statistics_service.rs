use std::sync::Arc;

use anyhow::Result;

use crate::core::state::report::report_store::ReportStore;
use crate::domain::report::dto::report_statistics_dto::{
    CumulativeTotalsDto, LethalityRateDto, MovingAveragePointDto, NewDeceasedPointDto,
    NewPositivesPointDto, NewRecoveredPointDto, PositivityRatePointDto, TotalCasesDto,
    TotalDeceasedDto, TotalRecoveredDto,
};
use crate::domain::report::error::ReportError;
use crate::domain::report::model::date_range::DateRange;

use super::report_statistics;

/// Statistics over the current report snapshot. Empty results become
/// `ReportError::NotFound`.
pub struct ReportStatisticsService {
    store: Arc<ReportStore>,
}

fn non_empty<T>(points: Vec<T>) -> Result<Vec<T>> {
    if points.is_empty() {
        return Err(ReportError::nothing_in_range().into());
    }
    Ok(points)
}

impl ReportStatisticsService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    pub async fn new_positives(&self, range: DateRange) -> Result<Vec<NewPositivesPointDto>> {
        let series = self.store.snapshot().await;
        non_empty(report_statistics::new_positives_series(&series, &range))
    }

    pub async fn new_recovered(&self, range: DateRange) -> Result<Vec<NewRecoveredPointDto>> {
        let series = self.store.snapshot().await;
        non_empty(report_statistics::new_recovered_series(&series, &range))
    }

    pub async fn new_deceased(&self, range: DateRange) -> Result<Vec<NewDeceasedPointDto>> {
        let series = self.store.snapshot().await;
        non_empty(report_statistics::new_deceased_series(&series, &range))
    }

    pub async fn moving_average(&self, range: DateRange) -> Result<Vec<MovingAveragePointDto>> {
        let series = self.store.snapshot().await;
        non_empty(report_statistics::moving_average_7(&series, &range))
    }

    pub async fn positivity_rate(&self, range: DateRange) -> Result<Vec<PositivityRatePointDto>> {
        let series = self.store.snapshot().await;
        non_empty(report_statistics::positivity_rate(&series, &range))
    }

    pub async fn lethality_rate(&self) -> Result<LethalityRateDto> {
        let series = self.store.snapshot().await;
        report_statistics::lethality_rate(&series).ok_or_else(|| ReportError::no_reports().into())
    }

    pub async fn cumulative_totals(&self) -> Result<CumulativeTotalsDto> {
        let series = self.store.snapshot().await;
        report_statistics::latest_cumulative_totals(&series)
            .ok_or_else(|| ReportError::no_reports().into())
    }

    pub async fn total_cases(&self) -> Result<TotalCasesDto> {
        let totals = self.cumulative_totals().await?;
        Ok(TotalCasesDto {
            total_cases: totals.total_cases,
        })
    }

    pub async fn total_recovered(&self) -> Result<TotalRecoveredDto> {
        let totals = self.cumulative_totals().await?;
        Ok(TotalRecoveredDto {
            recovered: totals.recovered,
        })
    }

    pub async fn total_deceased(&self) -> Result<TotalDeceasedDto> {
        let totals = self.cumulative_totals().await?;
        Ok(TotalDeceasedDto {
            deceased: totals.deceased,
        })
    }
}
