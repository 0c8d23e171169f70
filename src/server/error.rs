use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::generator::GenerateError;

/// Error returned by a handler, rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed client input.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::InvalidRequest(_) | GenerateError::LengthTooLarge { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            GenerateError::Qr(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(msg) => {
                tracing::info!("rejected request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_errors_map_to_status() {
        let err = GenerateError::LengthTooLarge { requested: 5000, max: 1024 };
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let err = GenerateError::Qr(crate::qr::QrRenderError::Encode("too long".into()));
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
