use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::warn;

use crate::api::dto::ApiResponse;
use crate::api::extract::api_token::ApiTokenGuard;
use crate::api::util::date_validator::{parse_date, parse_range};
use crate::api::util::json::{to_created_json, to_json};
use crate::app_state::AppState;
use crate::core::persistence::report::daily_report_entity::DailyReportEntity;
use crate::domain::report::dto::daily_report_patch_request::DailyReportPatchRequest;
use crate::errors::AppError;

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        warn!("Rejected report body: {}", rejection.body_text());
        AppError::BodyParsingError(rejection.body_text())
    })
}

pub struct DailyReportController;

impl DailyReportController {
    pub async fn list_reports(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<DailyReportEntity>>>, AppError> {
        to_json(state.report_service.list_reports().await)
    }

    pub async fn get_latest_report(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<DailyReportEntity>>, AppError> {
        to_json(state.report_service.get_latest_report().await)
    }

    pub async fn get_report(
        State(state): State<AppState>,
        Path(date): Path<String>,
    ) -> Result<Json<ApiResponse<DailyReportEntity>>, AppError> {
        let day = parse_date(&date)?;
        to_json(state.report_service.get_report(day).await)
    }

    pub async fn get_reports_in_range(
        State(state): State<AppState>,
        Path((start, end)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<DailyReportEntity>>>, AppError> {
        let range = parse_range(&start, &end)?;
        to_json(state.report_service.get_reports_in_range(range).await)
    }

    pub async fn create_report(
        _guard: ApiTokenGuard,
        State(state): State<AppState>,
        payload: Result<Json<DailyReportEntity>, JsonRejection>,
    ) -> Result<(StatusCode, Json<ApiResponse<DailyReportEntity>>), AppError> {
        let report = body(payload)?;
        to_created_json(state.report_service.create_report(report).await)
    }

    pub async fn update_report(
        _guard: ApiTokenGuard,
        State(state): State<AppState>,
        Path(date): Path<String>,
        payload: Result<Json<DailyReportPatchRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<DailyReportEntity>>, AppError> {
        let day = parse_date(&date)?;
        let patch = body(payload)?;
        to_json(state.report_service.update_report(day, patch).await)
    }

    pub async fn delete_report(
        _guard: ApiTokenGuard,
        State(state): State<AppState>,
        Path(date): Path<String>,
    ) -> Result<Json<ApiResponse<DailyReportEntity>>, AppError> {
        let day = parse_date(&date)?;
        to_json(state.report_service.delete_report(day).await)
    }
}
