use anyhow::Result;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::AppError;

pub fn to_json<T: serde::Serialize>(
    result: Result<T>
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(AppError::from(err)),
    }
}

/// Like [`to_json`], answering `201 Created` on success.
pub fn to_created_json<T: serde::Serialize>(
    result: Result<T>
) -> Result<(StatusCode, Json<ApiResponse<T>>), AppError> {
    to_json(result).map(|body| (StatusCode::CREATED, body))
}
