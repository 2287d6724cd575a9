use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::domain::report::error::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        let message = err.to_string();
        match err {
            ReportError::NotFound(_) => AppError::NotFound(message),
            ReportError::Conflict(_) => AppError::Conflict(message),
            ReportError::InvalidRange { .. } => AppError::InvalidRange(message),
            ReportError::InvalidPatch(_) | ReportError::InvalidReport(_) => {
                AppError::BodyParsingError(message)
            }
            ReportError::Persistence(_) => AppError::PersistenceError(message),
        }
    }
}

/// Domain outcomes travel inside `anyhow::Error`; anything else is a 500.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ReportError>() {
            Ok(report_err) => report_err.into(),
            Err(other) => internal_error(format!("{other:#}")),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn report_errors_map_to_distinct_statuses() {
        let cases = [
            (ReportError::no_reports(), StatusCode::NOT_FOUND),
            (ReportError::Conflict(d("2020-03-10")), StatusCode::CONFLICT),
            (
                ReportError::InvalidRange { start: d("2020-03-12"), end: d("2020-03-10") },
                StatusCode::BAD_REQUEST,
            ),
            (ReportError::InvalidPatch("bad".into()), StatusCode::BAD_REQUEST),
            (ReportError::InvalidReport("nested".into()), StatusCode::BAD_REQUEST),
            (ReportError::Persistence("disk full".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            let app: AppError = anyhow::Error::from(err).into();
            assert_eq!(app.status_code(), status);
        }
    }

    #[test]
    fn foreign_errors_become_internal() {
        let app: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(app, AppError::InternalServerError(_)));
    }

    #[test]
    fn response_carries_status() {
        let response = AppError::Unauthorized("invalid token".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AppError::Forbidden("token required".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
