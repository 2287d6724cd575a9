use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::date_validator::parse_range;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::report::dto::report_statistics_dto::{
    CumulativeTotalsDto, LethalityRateDto, MovingAveragePointDto, NewDeceasedPointDto,
    NewPositivesPointDto, NewRecoveredPointDto, PositivityRatePointDto, TotalCasesDto,
    TotalDeceasedDto, TotalRecoveredDto,
};
use crate::errors::AppError;

pub struct ReportStatisticsController;

impl ReportStatisticsController {
    pub async fn get_cumulative_totals(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<CumulativeTotalsDto>>, AppError> {
        to_json(state.statistics_service.cumulative_totals().await)
    }

    pub async fn get_total_cases(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<TotalCasesDto>>, AppError> {
        to_json(state.statistics_service.total_cases().await)
    }

    pub async fn get_total_recovered(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<TotalRecoveredDto>>, AppError> {
        to_json(state.statistics_service.total_recovered().await)
    }

    pub async fn get_total_deceased(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<TotalDeceasedDto>>, AppError> {
        to_json(state.statistics_service.total_deceased().await)
    }

    pub async fn get_lethality_rate(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<LethalityRateDto>>, AppError> {
        to_json(state.statistics_service.lethality_rate().await)
    }

    pub async fn get_new_positives(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<NewPositivesPointDto>>>, AppError> {
        let range = parse_range(&start, &end)?;
        to_json(state.statistics_service.new_positives(range).await)
    }

    pub async fn get_new_recovered(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<NewRecoveredPointDto>>>, AppError> {
        let range = parse_range(&start, &end)?;
        to_json(state.statistics_service.new_recovered(range).await)
    }

    pub async fn get_new_deceased(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<NewDeceasedPointDto>>>, AppError> {
        let range = parse_range(&start, &end)?;
        to_json(state.statistics_service.new_deceased(range).await)
    }

    pub async fn get_moving_average(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<MovingAveragePointDto>>>, AppError> {
        let range = parse_range(&start, &end)?;
        to_json(state.statistics_service.moving_average(range).await)
    }

    pub async fn get_positivity_rate(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<PositivityRatePointDto>>>, AppError> {
        let range = parse_range(&start, &end)?;
        to_json(state.statistics_service.positivity_rate(range).await)
    }
}
