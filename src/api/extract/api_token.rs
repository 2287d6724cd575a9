use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use tracing::warn;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Guards mutating routes behind `Authorization: Bearer <token>`.
///
/// Missing credentials answer 403, a wrong token 401. With no token
/// configured every guarded route answers 403.
pub struct ApiTokenGuard;

impl FromRequestParts<AppState> for ApiTokenGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let result = authorize(parts.headers.get(AUTHORIZATION), state.api_token.as_deref());
        if let Err(err) = &result {
            warn!("Rejected {} {}: {}", parts.method, parts.uri.path(), err);
        }
        result.map(|_| ApiTokenGuard)
    }
}

fn authorize(header: Option<&HeaderValue>, expected: Option<&str>) -> Result<(), AppError> {
    let Some(expected) = expected else {
        return Err(AppError::Forbidden("write access is disabled".into()));
    };
    let Some(header) = header else {
        return Err(AppError::Forbidden("a bearer token is required".into()));
    };

    let presented = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match presented {
        Some(token) if token == expected => Ok(()),
        _ => Err(AppError::Unauthorized("invalid token".into())),
    }
}
