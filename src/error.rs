use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::BackendError;

/// Error body shape shared by every JSON error response
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    #[error("Not Found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BackendUnavailable(e) => {
                tracing::warn!(error = %e, "Backend call failed");
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = ErrorDetail {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_unavailable_maps_to_503() {
        let err = AppError::from(BackendError::UnexpectedPayload("null"));
        assert_eq!(
            err.to_string(),
            "Backend unavailable: expected a JSON object from backend, got null"
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
