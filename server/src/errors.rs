use crate::metrics_defs::BADGE_ERRORS;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use badge::{ResolveError, UnknownColor};
use connectors::errors::ConnectorError;
use serde::Serialize;
use shared::counter;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("connector setup failed: {0}")]
    ConnectorError(#[from] ConnectorError),
}

/// Failures while producing a badge. Missing upstream entities are not an
/// error, they produce a fallback badge.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] ConnectorError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),
}

#[derive(Serialize)]
struct ApiErrorResponse {
    error_message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::Upstream(e) => {
                tracing::error!(error = %e, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "upstream")
            }
            ApiError::Resolve(e) => {
                tracing::error!(error = %e, "Badge resolution failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "resolve")
            }
            ApiError::UnknownColor(e) => {
                tracing::warn!(error = %e, "Rejected badge request");
                (StatusCode::BAD_REQUEST, "unknown_color")
            }
        };
        counter!(BADGE_ERRORS, "kind" => kind).increment(1);

        let body = Json(ApiErrorResponse {
            error_message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let response = ApiError::from(UnknownColor("mauve".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            ApiError::from(ResolveError::Mapping("not a number".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::from(ConnectorError::InvalidUrl("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
