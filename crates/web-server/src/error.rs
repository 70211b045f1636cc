use analytics::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use completion_client::ApiError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid inputs: {0}")]
    Analytics(#[from] AnalyticsError),
    #[error("Assistant error: {0}")]
    Assistant(#[from] ApiError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Analytics(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Assistant(ApiError::EmptyQuestion) => (
                StatusCode::BAD_REQUEST,
                "A question is required".to_string(),
            ),
            AppError::Assistant(ApiError::NotConfigured) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The assistant is not configured on this server".to_string(),
            ),
            AppError::Assistant(api_err) => {
                tracing::error!(error = ?api_err, "Assistant request failed.");
                (
                    StatusCode::BAD_GATEWAY,
                    "The assistant could not answer right now".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
