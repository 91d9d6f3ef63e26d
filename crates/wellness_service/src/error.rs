//! Error taxonomy for the scoring and ingestion handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wellness_client::ClientError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied an unusable request; never retried.
    #[error("{0}")]
    Validation(String),

    #[error("upstream error: {0}")]
    Upstream(#[from] ClientError),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Upstream(ClientError::Http(_)) => StatusCode::BAD_GATEWAY,
            ServiceError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
